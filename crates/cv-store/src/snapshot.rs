//! JSON snapshots of both inventories.
//!
//! An authority snapshot is a JSON array of [`CertificateInfo`] records. A
//! credential store snapshot is a JSON array of [`StoredCredential`]s: the
//! credential metadata plus, optionally, the PEM body so thumbprint
//! comparisons work offline.

use std::fs;
use std::path::Path;

use cv_types::{CertificateInfo, CertificateMetadata};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::memory::{InMemoryAuthority, InMemoryCredentialStore};

/// One credential as captured in a store snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredential {
    #[serde(flatten)]
    pub metadata: CertificateMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
}

/// Parse an authority snapshot.
pub fn authority_from_json(json: &str) -> StoreResult<InMemoryAuthority> {
    let certs: Vec<CertificateInfo> =
        serde_json::from_str(json).map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(InMemoryAuthority::new(certs))
}

/// Parse a credential store snapshot.
pub fn credential_store_from_json(json: &str) -> StoreResult<InMemoryCredentialStore> {
    let credentials: Vec<StoredCredential> =
        serde_json::from_str(json).map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(InMemoryCredentialStore::from_credentials(credentials))
}

/// Load an authority snapshot from disk.
pub fn load_authority(path: impl AsRef<Path>) -> StoreResult<InMemoryAuthority> {
    let path = path.as_ref();
    let authority = authority_from_json(&fs::read_to_string(path)?)?;
    info!(path = %path.display(), count = authority.len(), "loaded authority snapshot");
    Ok(authority)
}

/// Load a credential store snapshot from disk.
pub fn load_credential_store(path: impl AsRef<Path>) -> StoreResult<InMemoryCredentialStore> {
    let path = path.as_ref();
    let store = credential_store_from_json(&fs::read_to_string(path)?)?;
    info!(path = %path.display(), count = store.len(), "loaded credential store snapshot");
    Ok(store)
}
