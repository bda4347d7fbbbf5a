mod scan;

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tables_common::config::{parse_config, Config};
use tables_export::Format;
use tables_extract::{Flavor, PageSelection};

#[derive(Parser)]
#[command(
    name = "extract-tables",
    version,
    about = "Batch-extract tables from PDF files"
)]
struct Args {
    /// Directory containing PDF files
    input_dir: PathBuf,

    /// Directory to save output files
    output_dir: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "csv")]
    format: Format,

    /// Table-detection flavor; use lattice for PDFs with drawn table borders
    #[arg(long, default_value = "stream")]
    flavor: Flavor,

    /// Pages to process: "all", "1", "1-3", or "1,3,5"
    #[arg(long, default_value = "all")]
    pages: PageSelection,

    /// Process PDF files in subdirectories recursively
    #[arg(short, long)]
    recursive: bool,

    /// Force reprocessing of all PDFs, even if already processed
    #[arg(long)]
    force: bool,

    /// Validate that all PDFs have been processed (for CI); exits 1 if any
    /// PDF still needs processing
    #[arg(long)]
    validate: bool,

    /// Path to an optional TOML config file (scan excludes, size cap, ...)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Default log filter when RUST_LOG is unset.
///
/// The binary is named `extract-tables`, so events from this crate carry
/// the target `extract_tables` — not the package name `tables_cli`.
fn default_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!(
        "warn,extract_tables={level},tables_extract={level},tables_export={level},tables_common={level}"
    )
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(args.verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            parse_config(&raw)?
        }
        None => Config::default(),
    };

    if !args.input_dir.exists() {
        bail!("input directory does not exist: {}", args.input_dir.display());
    }
    if !args.input_dir.is_dir() {
        bail!("input path is not a directory: {}", args.input_dir.display());
    }

    let outcome = scan::run(&scan::Options {
        input_dir: &args.input_dir,
        output_dir: &args.output_dir,
        format: args.format,
        flavor: args.flavor,
        pages: &args.pages,
        recursive: args.recursive,
        force: args.force,
        validate: args.validate,
        scan: &config.scan,
    })?;

    if args.validate {
        if outcome.unprocessed.is_empty() {
            info!("validation passed: all PDFs are processed");
        } else {
            error!(
                "validation failed: {} unprocessed file(s)",
                outcome.unprocessed.len()
            );
            process::exit(1);
        }
    } else if outcome.failed > 0 {
        error!("{} file(s) failed to process", outcome.failed);
        process::exit(1);
    }

    Ok(())
}
