//! Inventory sources for credhub-venafi.
//!
//! The reconciliation engine never talks to a network. It consumes two
//! already-fetched inventories, and this crate defines where they come from:
//!
//! - [`CertificateAuthority`] -- lists certificates under a policy zone of the
//!   issuing authority
//! - [`CredentialStore`] -- lists certificate credentials and fetches the
//!   latest body of one credential by name
//!
//! # Backends
//!
//! - [`InMemoryAuthority`] / [`InMemoryCredentialStore`] -- `Vec`/`HashMap`
//!   backed sources for tests and embedding
//! - [`snapshot`] -- loads both sources from JSON files captured from the
//!   live systems
//!
//! # Design Rules
//!
//! 1. Sources are read-only from the engine's point of view.
//! 2. Listing failures are fatal to a reconciliation run and are propagated.
//! 3. Body lookups fail per credential; callers decide whether that is fatal.

pub mod error;
pub mod memory;
pub mod snapshot;
pub mod traits;
pub mod zone;

pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryAuthority, InMemoryCredentialStore};
pub use snapshot::{load_authority, load_credential_store, StoredCredential};
pub use traits::{CertificateAuthority, CredentialStore};
pub use zone::{prepend_policy_root, prepend_ved_root};
