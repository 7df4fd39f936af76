use cv_diff::{
    compare_certs, Classification, ClassificationCounts, CommonNameStrategy, ComparisonStrategy,
    PathStrategy, ThumbprintStrategy,
};
use cv_store::{CertificateAuthority, CredentialStore};
use cv_types::{CertificateInfo, CertificateMetadata};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{SdkError, SdkResult};
use crate::options::{ListOptions, StrategyKind};

/// One classified row of a reconciliation, owning both entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub classification: Classification,
    pub left: Option<CertificateInfo>,
    pub right: Option<CertificateMetadata>,
    /// Display columns, parallel to [`ReconcileReport::headers`].
    pub values: Vec<String>,
}

/// Result of [`Reconciler::list_both`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub strategy: StrategyKind,
    pub headers: Vec<String>,
    pub rows: Vec<ReportRow>,
    pub counts: ClassificationCounts,
    /// Per-credential lookup failures, in the order they occurred.
    pub errors: Vec<String>,
    /// The authority returned exactly as many records as were requested, so
    /// its inventory may be incomplete.
    pub truncated: bool,
    pub venafi_limit: usize,
}

impl ReconcileReport {
    /// Whether every entry on both sides has a counterpart.
    pub fn is_reconciled(&self) -> bool {
        self.counts.left_only == 0 && self.counts.right_only == 0
    }
}

/// Reconciles an issuing authority with a credential store.
pub struct Reconciler<'a> {
    authority: &'a dyn CertificateAuthority,
    store: &'a dyn CredentialStore,
}

impl<'a> Reconciler<'a> {
    pub fn new(authority: &'a dyn CertificateAuthority, store: &'a dyn CredentialStore) -> Self {
        Self { authority, store }
    }

    /// List both inventories and classify every entry.
    ///
    /// Listing failures abort the run. Body lookup failures of the thumbprint
    /// strategy do not; they are returned in [`ReconcileReport::errors`].
    pub fn list_both(&self, opts: &ListOptions) -> SdkResult<ReconcileReport> {
        if opts.venafi_limit == 0 {
            return Err(SdkError::InvalidOptions("venafi limit must be at least 1".into()));
        }
        info!(strategy = %opts.strategy, zone = %opts.venafi_root, "listing");

        let mut left = self.authority.list(opts.venafi_limit, &opts.venafi_root)?;
        let listed = self.store.list()?;
        let listed_count = listed.len();
        let mut right: Vec<CertificateMetadata> = listed
            .into_iter()
            .filter(|c| c.name.starts_with(&opts.credhub_root))
            .collect();
        info!(
            authority = left.len(),
            store = right.len(),
            filtered = listed_count - right.len(),
            "fetched inventories"
        );

        let truncated = left.len() == opts.venafi_limit;
        if truncated {
            warn!(
                limit = opts.venafi_limit,
                "authority limit reached, inventory may be incomplete"
            );
        }

        let mut report = match opts.strategy {
            StrategyKind::CommonName => {
                reconcile(&mut CommonNameStrategy::new(), &mut left, &mut right)
            }
            StrategyKind::Path => {
                let mut strategy =
                    PathStrategy::new(opts.venafi_path_prefix(), opts.credhub_path_prefix());
                reconcile(&mut strategy, &mut left, &mut right)
            }
            StrategyKind::Thumbprint => {
                reconcile(&mut ThumbprintStrategy::new(self.store), &mut left, &mut right)
            }
        };
        report.strategy = opts.strategy;
        report.truncated = truncated;
        report.venafi_limit = opts.venafi_limit;

        info!(
            matched = report.counts.matched,
            authority_only = report.counts.left_only,
            store_only = report.counts.right_only,
            errors = report.errors.len(),
            "reconciled"
        );
        Ok(report)
    }
}

fn reconcile(
    strategy: &mut dyn ComparisonStrategy,
    left: &mut [CertificateInfo],
    right: &mut [CertificateMetadata],
) -> ReconcileReport {
    let pairs = compare_certs(strategy, left, right);
    let counts = ClassificationCounts::of(&pairs);

    let rows: Vec<ReportRow> = pairs
        .iter()
        .map(|pair| ReportRow {
            classification: pair.classification(),
            left: pair.left().cloned(),
            right: pair.right().cloned(),
            values: strategy.values(pair.left(), pair.right()),
        })
        .collect();
    for (i, pair) in pairs.iter().enumerate() {
        debug!(index = i, "{pair}");
    }

    let errors = strategy
        .as_error_source()
        .map(|source| source.errors().iter().map(ToString::to_string).collect())
        .unwrap_or_default();

    ReconcileReport {
        strategy: StrategyKind::default(),
        headers: strategy.headers().into_iter().map(String::from).collect(),
        rows,
        counts,
        errors,
        truncated: false,
        venafi_limit: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cv_store::{
        InMemoryAuthority, InMemoryCredentialStore, StoreError, StoreResult, StoredCredential,
    };

    fn fixture(name: &str) -> String {
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../testdata/").to_string() + name
    }

    fn authority_by_id(ids: &[&str]) -> InMemoryAuthority {
        InMemoryAuthority::new(ids.iter().map(|id| CertificateInfo::with_id(*id)).collect())
    }

    fn store_named(names: &[&str]) -> InMemoryCredentialStore {
        InMemoryCredentialStore::from_credentials(names.iter().map(|name| StoredCredential {
            metadata: CertificateMetadata::named(*name),
            certificate: None,
        }))
    }

    fn render(report: &ReconcileReport, left: fn(&CertificateInfo) -> &str) -> Vec<String> {
        report
            .rows
            .iter()
            .map(|row| {
                format!(
                    "{}={}",
                    row.left.as_ref().map(left).unwrap_or_default(),
                    row.right.as_ref().map(|r| r.name.as_str()).unwrap_or_default()
                )
            })
            .collect()
    }

    fn id(c: &CertificateInfo) -> &str {
        &c.id
    }

    fn cn(c: &CertificateInfo) -> &str {
        &c.cn
    }

    #[test]
    fn list_both_by_path() {
        let cases: [(&[&str], &[&str], &str, &[&str]); 5] = [
            (&["a", "b"], &["a", "b"], "", &["a=a", "b=b"]),
            (&["/a", "b"], &["a", "b"], "", &["/a=a", "b=b"]),
            (&["a", "b"], &["a", "/b"], "", &["a=a", "b=/b"]),
            (&["a", "b"], &["/b", "a"], "", &["a=a", "b=/b"]),
            (&["/z/a", "b"], &["/b", "a"], "/z/", &["/z/a=a", "b=/b"]),
        ];
        for (left, right, venafi_prefix, expected) in cases {
            let authority = authority_by_id(left);
            let store = store_named(right);
            let opts = ListOptions {
                venafi_prefix: venafi_prefix.into(),
                strategy: StrategyKind::Path,
                ..Default::default()
            };
            let report = Reconciler::new(&authority, &store).list_both(&opts).unwrap();
            assert_eq!(render(&report, id), expected);
            assert!(report.is_reconciled());
        }
    }

    #[test]
    fn list_both_by_common_name_with_fixtures() {
        let authority = cv_store::load_authority(fixture("authority.json")).unwrap();
        let store = cv_store::load_credential_store(fixture("store.json")).unwrap();
        let report = Reconciler::new(&authority, &store)
            .list_both(&ListOptions::default())
            .unwrap();

        assert_eq!(
            render(&report, cn),
            vec![
                "TestCertb=/TestCertb_20nov26_DE38",
                "TestCommonName=/booyah/TestCommonName_20nov25_DE13",
                "=/aname",
                "localhost=",
            ]
        );
        assert_eq!(report.headers, vec!["VENAFI", "CREDHUB"]);
        assert_eq!(report.rows[2].values, vec!["", "/aname"]);
        assert_eq!(report.counts.matched, 2);
        assert!(!report.is_reconciled());
        assert!(report.errors.is_empty());
        assert!(!report.truncated);
    }

    #[test]
    fn list_both_by_thumbprint_reports_lookup_errors() {
        let authority = cv_store::load_authority(fixture("authority.json")).unwrap();
        let store = cv_store::load_credential_store(fixture("store.json")).unwrap();
        let opts = ListOptions::default().with_strategy(StrategyKind::Thumbprint);
        let report = Reconciler::new(&authority, &store).list_both(&opts).unwrap();

        assert_eq!(
            render(&report, cn),
            vec![
                "TestCommonName=/booyah/TestCommonName_20nov25_DE13",
                "TestCertb=",
                "localhost=",
                "=/TestCertb_20nov26_DE38",
                "=/aname",
            ]
        );
        assert_eq!(report.headers.len(), 3);
        assert_eq!(report.rows[0].values[2], "ebdbe32ef98991695958ea2510287f0e6c52a483");
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("/TestCertb_20nov26_DE38"));
        assert_eq!(store.fetch_count(), 3);
    }

    #[test]
    fn credhub_root_filters_store_entries() {
        let authority = authority_by_id(&[]);
        let store = store_named(&["/team/a", "/other/b", "/team/c"]);
        let opts = ListOptions {
            credhub_root: "/team".into(),
            ..Default::default()
        };
        let report = Reconciler::new(&authority, &store).list_both(&opts).unwrap();
        let names: Vec<&str> = report
            .rows
            .iter()
            .filter_map(|r| r.right.as_ref())
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["/team/a", "/team/c"]);
        assert!(report.rows.iter().all(|r| r.classification == Classification::RightOnly));
    }

    #[test]
    fn hitting_the_limit_marks_report_truncated() {
        let authority = authority_by_id(&["a", "b", "c"]);
        let store = store_named(&[]);
        let reconciler = Reconciler::new(&authority, &store);

        let report = reconciler.list_both(&ListOptions::default().with_limit(2)).unwrap();
        assert!(report.truncated);
        assert_eq!(report.rows.len(), 2);

        let report = reconciler.list_both(&ListOptions::default().with_limit(5)).unwrap();
        assert!(!report.truncated);
        assert_eq!(report.venafi_limit, 5);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let authority = authority_by_id(&["a"]);
        let store = store_named(&[]);
        let err = Reconciler::new(&authority, &store)
            .list_both(&ListOptions::default().with_limit(0))
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidOptions(_)));
    }

    struct UnavailableStore;

    impl CredentialStore for UnavailableStore {
        fn list(&self) -> StoreResult<Vec<CertificateMetadata>> {
            Err(StoreError::Unavailable("credhub is down".into()))
        }

        fn get_certificate(&self, name: &str) -> StoreResult<cv_types::Certificate> {
            Err(StoreError::NotFound(name.into()))
        }
    }

    #[test]
    fn listing_failure_is_fatal() {
        let authority = authority_by_id(&["a"]);
        let err = Reconciler::new(&authority, &UnavailableStore)
            .list_both(&ListOptions::default())
            .unwrap_err();
        assert!(matches!(err, SdkError::Store(StoreError::Unavailable(_))));
    }

    #[test]
    fn report_serializes_to_json() {
        let authority = authority_by_id(&["x"]);
        let store = store_named(&["/x"]);
        let opts = ListOptions::default().with_strategy(StrategyKind::Path);
        let report = Reconciler::new(&authority, &store).list_both(&opts).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["strategy"], "path");
        assert_eq!(json["rows"][0]["classification"], "matched");
        assert_eq!(json["rows"][0]["right"]["name"], "/x");
        assert_eq!(json["counts"]["matched"], 1);
    }
}
