//! Build orchestrator that mirrors the shared sources into each selected target.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::copier::{CopyReport, copy_subtree};
use crate::error::{BuildError, BuildResult};
use crate::targets::{TargetSelection, all_markers, select_targets};

/// Filesystem locations a build reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
  /// Shared source tree.
  pub source_dir: PathBuf,
  /// Directory each target's output directory is resolved against.
  pub output_root: PathBuf,
}

/// Outcome of one target within a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
  /// Name of the target that was built.
  pub target: &'static str,
  /// Destination root the target was written to.
  pub destination: PathBuf,
  /// Copy counters for the target.
  pub copy: CopyReport,
}

/// Per-target reports in build order. Empty when the selection matched nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
  /// One entry per built target.
  pub targets: Vec<TargetReport>,
}

impl BuildReport {
  /// Total number of files written across all targets.
  pub fn files_copied(&self) -> usize {
    self.targets.iter().map(|report| report.copy.files_copied).sum()
  }
}

/// High-level helper that builds targets from a [`BuildContext`].
pub struct AddonBuilder {
  context: BuildContext,
}

impl AddonBuilder {
  /// Create a builder for the provided context.
  pub fn new(context: BuildContext) -> Self {
    Self { context }
  }

  /// Build every target named by `selection`, one after another.
  pub fn build(&self, selection: &TargetSelection) -> BuildResult<BuildReport> {
    let targets = select_targets(selection);
    if targets.is_empty() {
      warn!("no target matches {:?}, nothing to build", selection);
      return Ok(BuildReport::default());
    }

    let source_dir = &self.context.source_dir;
    if !source_dir.is_dir() {
      return Err(BuildError::SourceNotDirectory(source_dir.clone()));
    }

    let markers = all_markers();
    let mut report = BuildReport::default();

    for target in targets {
      let destination = self.context.output_root.join(target.directory);
      info!("building {} into {}", target.name, destination.display());

      let copy = copy_subtree(source_dir, &destination, target.marker, &markers)?;
      info!(
        "{}: copied {} files, skipped {} entries, created {} directories",
        target.name, copy.files_copied, copy.skipped_entries, copy.directories_created
      );

      report.targets.push(TargetReport {
        target: target.name,
        destination,
        copy,
      });
    }

    Ok(report)
  }
}
