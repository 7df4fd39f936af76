//! Sorted merge-join of the two inventories.
//!
//! Both sides are stable-sorted by their normalized keys and walked once with
//! two cursors, so a diff costs O((n + m) log(n + m)) instead of comparing
//! every pair. Stable sorting keeps entries that share a key in input order,
//! which makes repeated runs over the same inventories produce the same diff.

use std::cmp::Ordering;

use cv_types::{CertificateInfo, CertificateMetadata};
use tracing::debug;

use crate::collector::{CertPair, Collector, PairCollector};
use crate::strategy::{compare_entries, ComparisonStrategy};

/// Classify two inventories under `strategy` and return the ordered pairs.
///
/// Sorts both slices in place, merges them, then applies the strategy's
/// [`PostSort`](crate::PostSort) if it has one. Lookup errors stay on the
/// strategy; see [`ComparisonStrategy::as_error_source`].
pub fn compare_certs<'a>(
    strategy: &mut dyn ComparisonStrategy,
    left: &'a mut [CertificateInfo],
    right: &'a mut [CertificateMetadata],
) -> Vec<CertPair<'a>> {
    let mut collector = PairCollector::new();
    compare_lists(strategy, left, right, &mut collector);

    let mut pairs = collector.into_pairs();
    if let Some(post_sort) = strategy.as_post_sort() {
        post_sort.post_sort(&mut pairs);
    }
    for (i, pair) in pairs.iter().enumerate() {
        debug!("{i} {pair}");
    }
    pairs
}

/// Sort both slices in place by normalized key, then merge them into
/// `collector`.
///
/// Callers that need the original order must copy the slices first.
pub fn compare_lists<'a, C>(
    strategy: &mut dyn ComparisonStrategy,
    left: &'a mut [CertificateInfo],
    right: &'a mut [CertificateMetadata],
    collector: &mut C,
) where
    C: Collector<'a, CertificateInfo, CertificateMetadata> + ?Sized,
{
    left.sort_by_cached_key(|l| strategy.left_sort_key(l));
    right.sort_by_cached_key(|r| strategy.right_sort_key(r));

    for l in left.iter() {
        debug!(key = %strategy.left_sort_key(l), "left");
    }
    for r in right.iter() {
        debug!(key = %strategy.right_sort_key(r), "right");
    }

    compare_sorted_certs(strategy, left, right, collector);
}

/// Merge two inventories already sorted by `strategy`'s normalized keys.
pub fn compare_sorted_certs<'a, C>(
    strategy: &mut dyn ComparisonStrategy,
    left: &'a [CertificateInfo],
    right: &'a [CertificateMetadata],
    collector: &mut C,
) where
    C: Collector<'a, CertificateInfo, CertificateMetadata> + ?Sized,
{
    compare_sorted_lists(left, right, |l, r| compare_entries(&mut *strategy, l, r), collector);
}

/// Two-pointer merge of two sorted slices.
///
/// `compare` orders a left element against a right element. Equal elements
/// are reported as matched and both cursors advance; otherwise the smaller
/// side is reported alone. Whatever remains of either side once the other is
/// exhausted is reported in order.
pub fn compare_sorted_lists<'a, L, R, F, C>(
    left: &'a [L],
    right: &'a [R],
    mut compare: F,
    collector: &mut C,
) where
    F: FnMut(&L, &R) -> Ordering,
    C: Collector<'a, L, R> + ?Sized,
{
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        match compare(&left[i], &right[j]) {
            Ordering::Less => {
                collector.left_only(&left[i]);
                i += 1;
            }
            Ordering::Equal => {
                collector.matched(&left[i], &right[j]);
                i += 1;
                j += 1;
            }
            Ordering::Greater => {
                collector.right_only(&right[j]);
                j += 1;
            }
        }
    }

    for l in &left[i..] {
        collector.left_only(l);
    }
    for r in &right[j..] {
        collector.right_only(r);
    }
}
