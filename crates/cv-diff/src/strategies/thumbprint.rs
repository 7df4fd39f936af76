use std::collections::HashMap;

use cv_store::CredentialStore;
use cv_types::{CertificateInfo, CertificateMetadata};
use tracing::{debug, warn};

use crate::collector::CertPair;
use crate::error::KeyError;
use crate::normalize::{strip_repeated_prefix, until_stable};
use crate::strategy::{ComparisonStrategy, ErrorSource, PostSort};

/// Match certificates by content: the authority's reported thumbprint against
/// the SHA-1 of the body stored under each credential name.
///
/// Computing a right-hand key fetches the credential's certificate from the
/// store. Results are cached per credential name, so sorting and then merging
/// costs one fetch per credential. Fetch or decode failures are recorded in
/// [`errors`](ErrorSource::errors) and the credential takes part with an
/// empty key, which sorts first and matches nothing with a thumbprint.
pub struct ThumbprintStrategy<'a> {
    store: &'a dyn CredentialStore,
    left_prefix: String,
    right_prefix: String,
    cache: HashMap<String, String>,
    errors: Vec<KeyError>,
}

impl<'a> ThumbprintStrategy<'a> {
    pub fn new(store: &'a dyn CredentialStore) -> Self {
        Self {
            store,
            left_prefix: String::new(),
            right_prefix: String::new(),
            cache: HashMap::new(),
            errors: Vec::new(),
        }
    }

    /// Strip a prefix from each side's key before comparing.
    pub fn with_prefixes(
        mut self,
        left_prefix: impl Into<String>,
        right_prefix: impl Into<String>,
    ) -> Self {
        self.left_prefix = left_prefix.into();
        self.right_prefix = right_prefix.into();
        self
    }

    /// The cached lower-case hex thumbprint of a credential, if computed.
    pub fn cached(&self, name: &str) -> Option<&str> {
        self.cache.get(name).map(String::as_str)
    }

    /// Drop cached thumbprints, e.g. before reusing the strategy on a new run.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Take the accumulated errors, leaving the list empty.
    pub fn take_errors(&mut self) -> Vec<KeyError> {
        std::mem::take(&mut self.errors)
    }

    fn lookup(&mut self, name: &str) -> String {
        let cert = match self.store.get_certificate(name) {
            Ok(cert) => cert,
            Err(source) => {
                warn!(name = %name, error = %source, "certificate fetch failed");
                self.errors.push(KeyError::Fetch {
                    name: name.to_string(),
                    source,
                });
                return String::new();
            }
        };
        match cv_crypto::thumbprint(&cert.value.certificate) {
            Ok(tp) => tp.to_hex(),
            Err(source) => {
                warn!(name = %name, error = %source, "thumbprint computation failed");
                self.errors.push(KeyError::Thumbprint {
                    name: name.to_string(),
                    source,
                });
                String::new()
            }
        }
    }

    /// Upper-case hex with `prefix` removed. Upper-casing can expose the
    /// prefix again, so both steps repeat until the key settles.
    fn normalize(key: &str, prefix: &str) -> String {
        until_stable(key, |k| strip_repeated_prefix(k, prefix).to_ascii_uppercase())
    }
}

impl ComparisonStrategy for ThumbprintStrategy<'_> {
    fn left_key(&self, left: &CertificateInfo) -> String {
        left.thumbprint.clone()
    }

    fn right_key(&mut self, right: &CertificateMetadata) -> String {
        if let Some(tp) = self.cache.get(&right.name) {
            return tp.clone();
        }
        let tp = self.lookup(&right.name);
        debug!(thumbprint = %tp, path = %right.name, "computed thumbprint");
        self.cache.insert(right.name.clone(), tp.clone());
        tp
    }

    fn normalize_left(&self, key: &str) -> String {
        Self::normalize(key, &self.left_prefix)
    }

    fn normalize_right(&self, key: &str) -> String {
        Self::normalize(key, &self.right_prefix)
    }

    fn headers(&self) -> Vec<&'static str> {
        vec!["VENAFI", "CREDHUB", "THUMBPRINT"]
    }

    /// The thumbprint column prefers the credential's computed value and falls
    /// back to the authority's.
    fn values(
        &self,
        left: Option<&CertificateInfo>,
        right: Option<&CertificateMetadata>,
    ) -> Vec<String> {
        let mut thumbprint = left.map(|l| l.thumbprint.as_str()).unwrap_or_default();
        if let Some(cached) = right.and_then(|r| self.cached(&r.name)) {
            thumbprint = cached;
        }
        vec![
            left.map(|l| l.cn.clone()).unwrap_or_default(),
            right.map(|r| r.name.clone()).unwrap_or_default(),
            thumbprint.to_lowercase(),
        ]
    }

    fn as_post_sort(&self) -> Option<&dyn PostSort> {
        Some(self)
    }

    fn as_error_source(&self) -> Option<&dyn ErrorSource> {
        Some(self)
    }
}

impl PostSort for ThumbprintStrategy<'_> {
    /// Pairs with an authority record first, then pairs with a credential,
    /// then by credential name and common name.
    fn post_sort(&self, pairs: &mut [CertPair<'_>]) {
        pairs.sort_by(|a, b| {
            a.left()
                .is_none()
                .cmp(&b.left().is_none())
                .then_with(|| a.right().is_none().cmp(&b.right().is_none()))
                .then_with(|| a.right().map(|r| &r.name).cmp(&b.right().map(|r| &r.name)))
                .then_with(|| a.left().map(|l| &l.cn).cmp(&b.left().map(|l| &l.cn)))
        });
    }
}

impl ErrorSource for ThumbprintStrategy<'_> {
    fn errors(&self) -> &[KeyError] {
        &self.errors
    }
}
