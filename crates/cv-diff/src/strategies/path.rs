use cv_types::{CertificateInfo, CertificateMetadata};

use crate::normalize::normalize_path;
use crate::strategy::ComparisonStrategy;

/// Match authority object paths against credential names as paths.
///
/// The authority uses `\`-separated paths rooted at `\VED`, the credential
/// store `/`-separated names. Each side's root prefix is removed and both are
/// compared as `/`-separated relative paths.
#[derive(Clone, Debug, Default)]
pub struct PathStrategy {
    left_prefix: String,
    right_prefix: String,
}

impl PathStrategy {
    pub fn new(left_prefix: impl Into<String>, right_prefix: impl Into<String>) -> Self {
        Self {
            left_prefix: left_prefix.into(),
            right_prefix: right_prefix.into(),
        }
    }
}

impl ComparisonStrategy for PathStrategy {
    fn left_key(&self, left: &CertificateInfo) -> String {
        left.id.clone()
    }

    fn right_key(&mut self, right: &CertificateMetadata) -> String {
        right.name.clone()
    }

    fn normalize_left(&self, key: &str) -> String {
        normalize_path(key, &self.left_prefix)
    }

    fn normalize_right(&self, key: &str) -> String {
        normalize_path(key, &self.right_prefix)
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
            left.map(|l| l.id.clone()).unwrap_or_default(),
            right.map(|r| r.name.clone()).unwrap_or_default(),
        ]
    }
}
