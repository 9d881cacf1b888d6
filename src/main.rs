use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Move id entries into their preceding name lines")]
struct Args {
    /// File to rewrite in place
    file: PathBuf,

    /// Show what would change without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Print a JSON report of the replacements to stdout
    #[arg(long)]
    json: bool,

    /// Log every line rewrite
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("entry_rebase={level}").parse()?),
        )
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let report = entry_rebase::rebase_file(&args.file, args.dry_run)
        .with_context(|| format!("rebase of {} failed", args.file.display()))?;

    if args.json {
        println!("{}", report.to_json()?);
    }

    Ok(())
}
