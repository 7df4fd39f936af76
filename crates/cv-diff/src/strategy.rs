use std::cmp::Ordering;

use cv_types::{CertificateInfo, CertificateMetadata};
use tracing::trace;

use crate::collector::CertPair;
use crate::error::KeyError;

/// How to key authority and credential store entries against each other.
///
/// A strategy extracts a raw key from each side, then normalizes it. Entries
/// whose normalized keys are equal are considered the same certificate. The
/// comparator sorts and merges on those normalized keys, so normalization
/// must be deterministic and idempotent.
///
/// Strategies may be lazily stateful: `right_key` takes `&mut self` so a
/// strategy can cache expensive lookups for the duration of a run. A strategy
/// instance is not meant to be shared between threads; wrap it in a lock if
/// concurrent runs reuse one instance.
pub trait ComparisonStrategy {
    /// Raw key of an authority record.
    fn left_key(&self, left: &CertificateInfo) -> String;

    /// Raw key of a credential store entry.
    ///
    /// Never fails: lookup errors are recorded by the strategy (see
    /// [`ErrorSource`]) and a best-effort key, possibly empty, is returned.
    fn right_key(&mut self, right: &CertificateMetadata) -> String;

    fn normalize_left(&self, key: &str) -> String;

    fn normalize_right(&self, key: &str) -> String;

    /// Column headers for displaying a diff produced by this strategy.
    fn headers(&self) -> Vec<&'static str>;

    /// Column values for one pair, parallel to [`headers`](Self::headers).
    /// An absent side renders as an empty string.
    fn values(&self, left: Option<&CertificateInfo>, right: Option<&CertificateMetadata>)
        -> Vec<String>;

    /// The secondary ordering applied after classification, if any.
    fn as_post_sort(&self) -> Option<&dyn PostSort> {
        None
    }

    /// Accumulated per-entry lookup errors, if the strategy records any.
    fn as_error_source(&self) -> Option<&dyn ErrorSource> {
        None
    }

    /// Normalized key of an authority record.
    fn left_sort_key(&self, left: &CertificateInfo) -> String {
        self.normalize_left(&self.left_key(left))
    }

    /// Normalized key of a credential store entry.
    fn right_sort_key(&mut self, right: &CertificateMetadata) -> String {
        let key = self.right_key(right);
        self.normalize_right(&key)
    }
}

/// Reorders classified pairs for display.
///
/// Used by strategies whose comparison key is not a meaningful display order.
pub trait PostSort {
    fn post_sort(&self, pairs: &mut [CertPair<'_>]);
}

/// Exposes the non-fatal errors a strategy recorded while deriving keys.
pub trait ErrorSource {
    fn errors(&self) -> &[KeyError];
}

/// Three-way comparison of one authority record with one store entry under
/// `strategy`, using the byte-wise order of the normalized keys.
pub fn compare_entries(
    strategy: &mut dyn ComparisonStrategy,
    left: &CertificateInfo,
    right: &CertificateMetadata,
) -> Ordering {
    let left_key = strategy.left_sort_key(left);
    let right_key = strategy.right_sort_key(right);
    let ordering = left_key.cmp(&right_key);
    trace!(left = %left_key, right = %right_key, ?ordering, "compared keys");
    ordering
}
