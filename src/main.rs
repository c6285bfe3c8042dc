use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use addon_builder::logging::init_logging;
use addon_builder::{AddonBuilder, BuildConfig, BuildReport, TargetSelection};

/// Copy the shared `_common` add-on sources into the per-browser directories.
#[derive(Debug, Parser)]
#[command(name = "addon-builder", version, about)]
struct Cli {
    /// Target to build (`firefox` or `chrome`). Builds every target when omitted.
    target: Option<String>,

    /// Shared source directory, overriding the config file.
    #[arg(long, value_name = "DIR")]
    source: Option<PathBuf>,

    /// Root the target directories are created under, overriding the config file.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Explicit configuration file instead of `addon.config.json`.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Defaults to `RUST_LOG`, then `info`.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let config = load_config(cli.config.as_deref())?;
    let mut context = config.build_context();
    if let Some(source) = cli.source {
        context.source_dir = source;
    }
    if let Some(out) = cli.out {
        context.output_root = out;
    }

    let selection = TargetSelection::from_arg(cli.target.as_deref());
    info!("building {:?} from {}", selection, context.source_dir.display());

    let report = AddonBuilder::new(context)
        .build(&selection)
        .context("add-on build failed")?;
    print_report(&report);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<BuildConfig> {
    match path {
        Some(path) => BuildConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(BuildConfig::discover(Path::new("."))),
    }
}

fn print_report(report: &BuildReport) {
    for target in &report.targets {
        info!(
            "{} -> {}: {} copied, {} unchanged, {} skipped, {} ignored",
            target.target,
            target.destination.display(),
            target.copy.files_copied,
            target.copy.unchanged_files,
            target.copy.skipped_entries,
            target.copy.ignored_entries
        );
    }
    info!(
        "done: {} targets, {} files copied",
        report.targets.len(),
        report.files_copied()
    );
}
