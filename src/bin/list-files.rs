use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use addon_builder::logging::init_logging;
use addon_builder::{BuildConfig, write_manifest_file};

/// Write every file below a directory as a quoted, comma-terminated line.
#[derive(Debug, Parser)]
#[command(name = "list-files", version, about)]
struct Cli {
    /// Directory to list.
    #[arg(long, value_name = "DIR")]
    root: Option<String>,

    /// Prefix written in place of the listed directory.
    #[arg(long, value_name = "PREFIX")]
    prefix: Option<String>,

    /// Output file.
    #[arg(long, value_name = "FILE")]
    output: Option<String>,

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

    let config = match cli.config.as_deref() {
        Some(path) => BuildConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => BuildConfig::discover(Path::new(".")),
    };

    let mut options = config.manifest;
    if let Some(root) = cli.root {
        options.root_dir = root;
    }
    if let Some(prefix) = cli.prefix {
        options.relative_prefix = prefix;
    }
    if let Some(output) = cli.output {
        options.output_file = output;
    }

    write_manifest_file(
        Path::new(&options.root_dir),
        &options.relative_prefix,
        Path::new(&options.output_file),
    )
    .with_context(|| format!("failed to list files under {}", options.root_dir))?;
    Ok(())
}
