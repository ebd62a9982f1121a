use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use pool_core::{QuoteWorksheet, validate_request};
use pool_data::logging::init_logging;
use pool_data::{MaterialCatalogLoader, QuoteFile, QuoteSummary};
use tracing::{info, warn};

/// Price a pool construction job from a TOML quote file.
///
/// The quote file holds the request under `[request]` and optional
/// overrides of the pricing constants under `[config]`. Set `RUST_LOG`
/// to change the log level (default: info).
#[derive(Parser, Debug)]
#[command(name = "pool-quote")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the TOML quote file
    #[arg(short, long)]
    request: PathBuf,

    /// CSV material catalog appended to the request's materials
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Price the request even if it fails form validation
    #[arg(long, default_value_t = false)]
    skip_validation: bool,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let QuoteFile {
        mut request,
        config,
    } = QuoteFile::load_from_file(&args.request)
        .with_context(|| format!("Failed to load quote file: {}", args.request.display()))?;
    info!(path = %args.request.display(), "Loaded quote file");

    if let Some(catalog) = &args.catalog {
        let items = MaterialCatalogLoader::load_from_file(catalog)
            .with_context(|| format!("Failed to load catalog: {}", catalog.display()))?;
        info!(path = %catalog.display(), count = items.len(), "Loaded material catalog");
        request.materials.extend(items);
    }

    if args.skip_validation {
        warn!("Form validation skipped");
    } else if let Err(errors) = validate_request(&request) {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!("quote request has {} validation error(s)", errors.len());
    }

    let worksheet = QuoteWorksheet::new(config);
    let result = worksheet
        .calculate(&request)
        .context("Failed to compute quote")?;
    info!(grand_total = %result.grand_total, "Quote computed");
    let summary =
        QuoteSummary::new(&request, &result).context("Failed to itemize materials")?;

    println!("{summary}");

    Ok(())
}
