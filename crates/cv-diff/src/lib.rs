//! Reconciliation engine for credhub-venafi.
//!
//! Compares the issuing authority's inventory (left) with the credential
//! store's inventory (right) and classifies every entry as left-only,
//! right-only or matched. The two sides key certificates differently, so a
//! pluggable [`ComparisonStrategy`] derives and normalizes a comparable key
//! for each side; both lists are then stable-sorted by that key and walked
//! in one merge-join pass.
//!
//! # Key Types
//!
//! - [`ComparisonStrategy`] -- key extraction, normalization and display columns
//! - [`CommonNameStrategy`] / [`PathStrategy`] / [`ThumbprintStrategy`] -- the built-in strategies
//! - [`PostSort`] / [`ErrorSource`] -- optional strategy capabilities
//! - [`Collector`] / [`PairCollector`] / [`Pair`] -- sinks for classification events
//! - [`compare_certs`] / [`compare_lists`] / [`compare_sorted_lists`] -- the comparator

pub mod collector;
pub mod error;
pub mod merge;
pub mod normalize;
pub mod strategies;
pub mod strategy;

pub use collector::{CertPair, Classification, ClassificationCounts, Collector, Pair, PairCollector};
pub use error::KeyError;
pub use merge::{compare_certs, compare_lists, compare_sorted_certs, compare_sorted_lists};
pub use normalize::{credential_name_key, extract_last_segment, remove_generated_suffix};
pub use strategies::{CommonNameStrategy, PathStrategy, ThumbprintStrategy};
pub use strategy::{compare_entries, ComparisonStrategy, ErrorSource, PostSort};
