use cv_types::{Certificate, CertificateInfo, CertificateMetadata};

use crate::error::StoreResult;

/// The issuing authority's certificate inventory.
pub trait CertificateAuthority: Send + Sync {
    /// List up to `limit` certificates under `zone`.
    ///
    /// `zone` is a policy path relative to the authority root; see
    /// [`prepend_ved_root`](crate::prepend_ved_root). A result of exactly
    /// `limit` records may be truncated and callers are expected to warn.
    fn list(&self, limit: usize, zone: &str) -> StoreResult<Vec<CertificateInfo>>;
}

/// The credential store's certificate inventory.
pub trait CredentialStore: Send + Sync {
    /// List metadata for every certificate credential.
    fn list(&self) -> StoreResult<Vec<CertificateMetadata>>;

    /// Fetch the latest version of the certificate stored under `name`.
    ///
    /// Returns [`StoreError::NotFound`](crate::StoreError::NotFound) if no
    /// such credential exists.
    fn get_certificate(&self, name: &str) -> StoreResult<Certificate>;
}
