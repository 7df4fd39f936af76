use cv_types::{CertificateInfo, CertificateMetadata};

use crate::normalize::{credential_name_key, strip_repeated_prefix, until_stable};
use crate::strategy::ComparisonStrategy;

/// Match authority common names against credential names.
///
/// The credential store names a pushed certificate
/// `<path>/<common name>_<generated suffix>`, so the right-hand key is the
/// last path segment with the suffix removed.
#[derive(Clone, Debug, Default)]
pub struct CommonNameStrategy {
    left_prefix: String,
    right_prefix: String,
}

impl CommonNameStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strip `left_prefix` from common names and `right_prefix` from
    /// credential names before normalizing. A prefix repeated at the front of
    /// a key is stripped every time it occurs.
    pub fn with_prefixes(left_prefix: impl Into<String>, right_prefix: impl Into<String>) -> Self {
        Self {
            left_prefix: left_prefix.into(),
            right_prefix: right_prefix.into(),
        }
    }
}

impl ComparisonStrategy for CommonNameStrategy {
    fn left_key(&self, left: &CertificateInfo) -> String {
        left.cn.clone()
    }

    fn right_key(&mut self, right: &CertificateMetadata) -> String {
        right.name.clone()
    }

    fn normalize_left(&self, key: &str) -> String {
        strip_repeated_prefix(key, &self.left_prefix).to_string()
    }

    fn normalize_right(&self, key: &str) -> String {
        until_stable(key, |k| credential_name_key(strip_repeated_prefix(k, &self.right_prefix)))
    }

    fn headers(&self) -> Vec<&'static str> {
        vec!["VENAFI", "CREDHUB"]
    }

    fn values(
        &self,
        left: Option<&CertificateInfo>,
        right: Option<&CertificateMetadata>,
    ) -> Vec<String> {
        vec![
            left.map(|l| l.cn.clone()).unwrap_or_default(),
            right.map(|r| r.name.clone()).unwrap_or_default(),
        ]
    }
}
