use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of authority records requested when none is configured.
pub const DEFAULT_VENAFI_LIMIT: usize = 10_000;

/// Which key the two inventories are matched on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Authority common name against the credential's last path segment.
    #[default]
    CommonName,
    /// Authority object path against the full credential name.
    Path,
    /// Authority thumbprint against the SHA-1 of the stored body.
    Thumbprint,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommonName => write!(f, "common-name"),
            Self::Path => write!(f, "path"),
            Self::Thumbprint => write!(f, "thumbprint"),
        }
    }
}

/// Parameters of one reconciliation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Maximum number of authority records to list.
    pub venafi_limit: usize,
    /// Authority policy zone to list, also the root of the path strategy's
    /// left prefix.
    pub venafi_root: String,
    pub venafi_prefix: String,
    /// Only credentials whose name starts with this take part.
    pub credhub_root: String,
    pub credhub_prefix: String,
    pub strategy: StrategyKind,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            venafi_limit: DEFAULT_VENAFI_LIMIT,
            venafi_root: String::new(),
            venafi_prefix: String::new(),
            credhub_root: String::new(),
            credhub_prefix: String::new(),
            strategy: StrategyKind::default(),
        }
    }
}

impl ListOptions {
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.venafi_limit = limit;
        self
    }

    /// Prefix stripped from authority object paths by the path strategy.
    pub fn venafi_path_prefix(&self) -> String {
        join_root(&self.venafi_root, &self.venafi_prefix, "\\")
    }

    /// Prefix stripped from credential names by the path strategy.
    pub fn credhub_path_prefix(&self) -> String {
        join_root(&self.credhub_root, &self.credhub_prefix, "/")
    }
}

/// Join a root and a prefix with exactly one `sep` between them.
///
/// An empty root yields the prefix with its leading `sep` removed.
pub fn join_root(root: &str, prefix: &str, sep: &str) -> String {
    let root = root.strip_suffix(sep).unwrap_or(root);
    let prefix = prefix.strip_prefix(sep).unwrap_or(prefix);
    if root.is_empty() {
        prefix.to_string()
    } else {
        format!("{root}{sep}{prefix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_root_with_slash() {
        assert_eq!(join_root("a", "b", "/"), "a/b");
        assert_eq!(join_root("a/", "/b", "/"), "a/b");
        assert_eq!(join_root("a/", "b", "/"), "a/b");
        assert_eq!(join_root("a", "/b", "/"), "a/b");
    }

    #[test]
    fn join_root_with_backslash() {
        assert_eq!(join_root("a", "b", "\\"), "a\\b");
        assert_eq!(join_root("a\\", "\\b", "\\"), "a\\b");
        assert_eq!(join_root("a\\", "b", "\\"), "a\\b");
        assert_eq!(join_root("a", "\\b", "\\"), "a\\b");
    }

    #[test]
    fn join_root_with_empty_root() {
        assert_eq!(join_root("", "/z/", "/"), "z/");
        assert_eq!(join_root("", "/z/", "\\"), "/z/");
        assert_eq!(join_root("", "", "/"), "");
        assert_eq!(join_root("a", "", "/"), "a/");
    }

    #[test]
    fn defaults() {
        let opts = ListOptions::default();
        assert_eq!(opts.venafi_limit, DEFAULT_VENAFI_LIMIT);
        assert_eq!(opts.strategy, StrategyKind::CommonName);
        assert_eq!(opts.venafi_path_prefix(), "");
        assert_eq!(opts.credhub_path_prefix(), "");
    }

    #[test]
    fn path_prefixes_join_roots() {
        let opts = ListOptions {
            venafi_root: "\\VED\\Policy\\".into(),
            venafi_prefix: "Certificates".into(),
            credhub_root: "/team".into(),
            credhub_prefix: "/certs".into(),
            ..Default::default()
        };
        assert_eq!(opts.venafi_path_prefix(), "\\VED\\Policy\\Certificates");
        assert_eq!(opts.credhub_path_prefix(), "/team/certs");
    }

    #[test]
    fn strategy_kind_serde_names() {
        assert_eq!(serde_json::to_string(&StrategyKind::CommonName).unwrap(), "\"common_name\"");
        let kind: StrategyKind = serde_json::from_str("\"thumbprint\"").unwrap();
        assert_eq!(kind, StrategyKind::Thumbprint);
        assert_eq!(StrategyKind::Path.to_string(), "path");
    }
}
