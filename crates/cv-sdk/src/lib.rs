//! High-level SDK for credhub-venafi.
//!
//! Lists the issuing authority and the credential store, reconciles the two
//! inventories with the selected strategy and returns a serializable report.
//! This is the main entry point for tools embedding the reconciliation engine.

pub mod error;
pub mod options;
pub mod reconcile;

pub use error::{SdkError, SdkResult};
pub use options::{join_root, ListOptions, StrategyKind, DEFAULT_VENAFI_LIMIT};
pub use reconcile::{ReconcileReport, Reconciler, ReportRow};

// Re-export key types
pub use cv_crypto::{thumbprint, ThumbprintError};
pub use cv_diff::{Classification, ClassificationCounts};
pub use cv_store::{
    load_authority, load_credential_store, CertificateAuthority, CredentialStore, InMemoryAuthority,
    InMemoryCredentialStore, StoreError,
};
pub use cv_types::{CertificateInfo, CertificateMetadata, Thumbprint};
