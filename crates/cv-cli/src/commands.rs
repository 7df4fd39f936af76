use std::fs;

use anyhow::Context;
use colored::Colorize;
use cv_sdk::{load_authority, load_credential_store, Reconciler};
use tracing::debug;

use crate::cli::*;
use crate::config::CvConfig;
use crate::render::{render_table, render_warnings};

pub fn run_command(cli: Cli, config: &CvConfig) -> anyhow::Result<()> {
    match cli.command {
        Command::List(args) => cmd_list(&args, config, &cli.format),
        Command::Thumbprint(args) => cmd_thumbprint(&args, &cli.format),
    }
}

fn cmd_list(args: &ListArgs, config: &CvConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let authority_path = args
        .authority_snapshot
        .as_ref()
        .or(config.authority_snapshot.as_ref())
        .context("no Venafi inventory: pass --authority-snapshot or set authority_snapshot in the config file")?;
    let store_path = args
        .store_snapshot
        .as_ref()
        .or(config.store_snapshot.as_ref())
        .context("no CredHub inventory: pass --store-snapshot or set store_snapshot in the config file")?;

    let authority = load_authority(authority_path)
        .with_context(|| format!("loading {}", authority_path.display()))?;
    let store = load_credential_store(store_path)
        .with_context(|| format!("loading {}", store_path.display()))?;

    let opts = config.list_options(args);
    debug!(?opts, "list options");
    let report = Reconciler::new(&authority, &store).list_both(&opts)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            print!("{}", render_table(&report));
            for line in render_warnings(&report) {
                eprintln!("{}", line.red());
            }
        }
    }
    Ok(())
}

fn cmd_thumbprint(args: &ThumbprintArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let pem = fs::read_to_string(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let thumbprint = cv_sdk::thumbprint(&pem)
        .with_context(|| format!("fingerprinting {}", args.path.display()))?;

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "path": args.path, "thumbprint": thumbprint.to_hex() })
        ),
        OutputFormat::Text => println!("{thumbprint}"),
    }
    Ok(())
}
