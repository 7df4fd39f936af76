use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use cv_types::{Certificate, CertificateInfo, CertificateMetadata};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::snapshot::StoredCredential;
use crate::traits::{CertificateAuthority, CredentialStore};
use crate::zone::prepend_ved_root;

/// In-memory authority inventory.
///
/// Records keep their insertion order, which is the order `list` returns them
/// in, matching how the live authority pages through a zone.
#[derive(Default)]
pub struct InMemoryAuthority {
    certs: RwLock<Vec<CertificateInfo>>,
}

impl InMemoryAuthority {
    pub fn new(certs: Vec<CertificateInfo>) -> Self {
        Self {
            certs: RwLock::new(certs),
        }
    }

    pub fn insert(&self, cert: CertificateInfo) {
        self.certs.write().expect("lock poisoned").push(cert);
    }

    pub fn len(&self) -> usize {
        self.certs.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CertificateAuthority for InMemoryAuthority {
    /// An empty `zone` lists everything; otherwise only records whose object
    /// path lies under the `\VED`-rooted zone are returned.
    fn list(&self, limit: usize, zone: &str) -> StoreResult<Vec<CertificateInfo>> {
        let certs = self.certs.read().expect("lock poisoned");
        let root = (!zone.is_empty()).then(|| prepend_ved_root(zone));
        let listed: Vec<CertificateInfo> = certs
            .iter()
            .filter(|c| root.as_deref().map_or(true, |r| c.id.starts_with(r)))
            .take(limit)
            .cloned()
            .collect();
        debug!(zone = %zone, count = listed.len(), "listed authority certificates");
        Ok(listed)
    }
}

/// In-memory credential store keyed by credential name.
///
/// Counts body fetches so callers can observe lookup caching.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    entries: RwLock<BTreeMap<String, StoredCredential>>,
    fetches: AtomicUsize,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from stored credentials. Later duplicates replace earlier ones.
    pub fn from_credentials(credentials: impl IntoIterator<Item = StoredCredential>) -> Self {
        let store = Self::new();
        for credential in credentials {
            store.put(credential);
        }
        store
    }

    /// Store a credential with a PEM body.
    pub fn put_certificate(&self, name: impl Into<String>, pem: impl Into<String>) {
        self.put(StoredCredential {
            metadata: CertificateMetadata::named(name),
            certificate: Some(pem.into()),
        });
    }

    /// Store a credential, replacing any credential with the same name.
    pub fn put(&self, credential: StoredCredential) {
        self.entries
            .write()
            .expect("lock poisoned")
            .insert(credential.metadata.name.clone(), credential);
    }

    /// Number of `get_certificate` calls served so far, successful or not.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn list(&self) -> StoreResult<Vec<CertificateMetadata>> {
        let entries = self.entries.read().expect("lock poisoned");
        Ok(entries.values().map(|c| c.metadata.clone()).collect())
    }

    fn get_certificate(&self, name: &str) -> StoreResult<Certificate> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        let entries = self.entries.read().expect("lock poisoned");
        let credential = entries
            .get(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        let pem = credential
            .certificate
            .as_ref()
            .ok_or_else(|| StoreError::MissingBody(name.to_string()))?;
        Ok(Certificate::from_pem(name, pem.clone()))
    }
}
