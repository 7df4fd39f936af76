//! `~/.cv/config.toml`: defaults for every `cv list` flag.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use cv_sdk::{ListOptions, DEFAULT_VENAFI_LIMIT};
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::cli::ListArgs;

/// How much the tool reports while it works.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Status,
    Info,
    Verbose,
}

impl LogLevel {
    pub fn as_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Status => Level::WARN,
            Self::Info => Level::INFO,
            Self::Verbose => Level::DEBUG,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvConfig {
    pub log_level: LogLevel,
    pub authority_snapshot: Option<PathBuf>,
    pub store_snapshot: Option<PathBuf>,
    pub venafi_root: String,
    pub venafi_prefix: String,
    pub credhub_root: String,
    pub credhub_prefix: String,
    pub venafi_limit: usize,
}

impl Default for CvConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            authority_snapshot: None,
            store_snapshot: None,
            venafi_root: String::new(),
            venafi_prefix: String::new(),
            credhub_root: String::new(),
            credhub_prefix: String::new(),
            venafi_limit: DEFAULT_VENAFI_LIMIT,
        }
    }
}

impl CvConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".cv").join("config.toml"))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("invalid configuration")
    }

    /// Load `path`, or the default location when `None`. A missing file
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("loading {}", path.display()))
    }

    /// Options for one `cv list` run; flags override configured values.
    pub fn list_options(&self, args: &ListArgs) -> ListOptions {
        ListOptions {
            venafi_limit: args.vlimit.unwrap_or(self.venafi_limit),
            venafi_root: args.vroot.clone().unwrap_or_else(|| self.venafi_root.clone()),
            venafi_prefix: args.vprefix.clone().unwrap_or_else(|| self.venafi_prefix.clone()),
            credhub_root: args.croot.clone().unwrap_or_else(|| self.credhub_root.clone()),
            credhub_prefix: args.cprefix.clone().unwrap_or_else(|| self.credhub_prefix.clone()),
            strategy: args.strategy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use cv_sdk::StrategyKind;

    fn list_args(argv: &[&str]) -> ListArgs {
        let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
        let Command::List(args) = cli.command else {
            panic!("wrong command");
        };
        args
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CvConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap();
        assert_eq!(config, CvConfig::default());
        assert_eq!(config.venafi_limit, 10_000);
        assert_eq!(config.log_level, LogLevel::Status);
    }

    #[test]
    fn loads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
log_level = "verbose"
credhub_root = "/team"
venafi_limit = 25
store_snapshot = "credhub.json"
"#,
        )
        .unwrap();

        let config = CvConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.log_level, LogLevel::Verbose);
        assert_eq!(config.credhub_root, "/team");
        assert_eq!(config.venafi_limit, 25);
        assert_eq!(config.store_snapshot, Some(PathBuf::from("credhub.json")));
        assert!(config.authority_snapshot.is_none());
        assert_eq!(config.venafi_root, "");
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(CvConfig::parse("log_level = \"chatty\"").is_err());
    }

    #[test]
    fn log_levels_map_to_tracing() {
        assert_eq!(LogLevel::Error.as_level(), Level::ERROR);
        assert_eq!(LogLevel::Status.as_level(), Level::WARN);
        assert_eq!(LogLevel::Info.as_level(), Level::INFO);
        assert_eq!(LogLevel::Verbose.as_level(), Level::DEBUG);
    }

    #[test]
    fn flags_override_config() {
        let config = CvConfig {
            venafi_root: "Policy".into(),
            credhub_root: "/team".into(),
            venafi_limit: 25,
            ..Default::default()
        };

        let opts = config.list_options(&list_args(&["cv", "list"]));
        assert_eq!(opts.venafi_root, "Policy");
        assert_eq!(opts.credhub_root, "/team");
        assert_eq!(opts.venafi_limit, 25);
        assert_eq!(opts.strategy, StrategyKind::CommonName);

        let args = list_args(&["cv", "list", "--by-path", "--croot", "/ops", "--vlimit", "3"]);
        let opts = config.list_options(&args);
        assert_eq!(opts.venafi_root, "Policy");
        assert_eq!(opts.credhub_root, "/ops");
        assert_eq!(opts.venafi_limit, 3);
        assert_eq!(opts.strategy, StrategyKind::Path);
    }
}
