use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cv_sdk::StrategyKind;

#[derive(Parser)]
#[command(
    name = "cv",
    about = "credhub-venafi: reconcile certificates between Venafi and CredHub",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file [default: ~/.cv/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare the Venafi and CredHub inventories
    List(ListArgs),
    /// Print the SHA-1 thumbprint of a PEM certificate
    Thumbprint(ThumbprintArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Match on certificate thumbprints
    #[arg(long, conflicts_with = "by_path")]
    pub by_thumbprint: bool,
    /// Match on object paths and credential names
    #[arg(long)]
    pub by_path: bool,
    /// Maximum number of Venafi records to list
    #[arg(long)]
    pub vlimit: Option<usize>,
    /// Venafi policy zone
    #[arg(long)]
    pub vroot: Option<String>,
    #[arg(long)]
    pub vprefix: Option<String>,
    /// Only compare CredHub credentials under this root
    #[arg(long)]
    pub croot: Option<String>,
    #[arg(long)]
    pub cprefix: Option<String>,
    /// JSON file with the Venafi inventory
    #[arg(long)]
    pub authority_snapshot: Option<PathBuf>,
    /// JSON file with the CredHub inventory
    #[arg(long)]
    pub store_snapshot: Option<PathBuf>,
}

impl ListArgs {
    pub fn strategy(&self) -> StrategyKind {
        if self.by_thumbprint {
            StrategyKind::Thumbprint
        } else if self.by_path {
            StrategyKind::Path
        } else {
            StrategyKind::CommonName
        }
    }
}

#[derive(Args)]
pub struct ThumbprintArgs {
    /// PEM file to fingerprint
    pub path: PathBuf,
}
