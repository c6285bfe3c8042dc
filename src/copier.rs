//! Mirroring the shared source tree into a single target directory.

use std::collections::{BTreeSet, HashSet};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use same_file::is_same_file;
use tracing::{debug, warn};

use crate::error::{BuildError, BuildResult};
use crate::marker::decompose;

/// Counters collected while mirroring one target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
  /// Files written into the destination tree.
  pub files_copied: usize,
  /// Destination directories that had to be created, missing ancestors included.
  pub directories_created: usize,
  /// Entries left out because they carry another target's marker or `ignore`.
  pub skipped_entries: usize,
  /// Files already present as the very same file at the destination.
  pub unchanged_files: usize,
  /// Symlinks and special files, which are never mirrored.
  pub ignored_entries: usize,
}

impl CopyReport {
  /// Number of source entries this run looked at, directories excluded.
  pub fn total_processed(&self) -> usize {
    self.files_copied + self.skipped_entries + self.unchanged_files + self.ignored_entries
  }
}

/// Mirror `source_dir` into `dest_dir` for the target owning `target_marker`.
///
/// Unmarked entries and entries carrying `target_marker` are copied with the
/// marker segment removed from their name. Everything else is skipped. Existing
/// destination files are overwritten. The first filesystem error aborts the
/// walk and leaves whatever was already written in place.
///
/// A destination inside the source tree is rejected before anything is
/// created, since the walk would otherwise descend into its own output.
pub fn copy_subtree(
  source_dir: &Path,
  dest_dir: &Path,
  target_marker: &str,
  markers: &BTreeSet<&str>,
) -> BuildResult<CopyReport> {
  let source_root = resolve_path(source_dir);
  let dest_root = resolve_path(dest_dir);
  if dest_root.starts_with(&source_root) {
    return Err(BuildError::DestinationInsideSource {
      source_dir: source_root,
      dest_dir: dest_root,
    });
  }

  let mut report = CopyReport::default();
  mirror_directory(source_dir, dest_dir, target_marker, markers, &mut report)?;
  Ok(report)
}

fn mirror_directory(
  source_dir: &Path,
  dest_dir: &Path,
  target_marker: &str,
  markers: &BTreeSet<&str>,
  report: &mut CopyReport,
) -> BuildResult<()> {
  debug!("mirroring {} into {}", source_dir.display(), dest_dir.display());

  if !dest_dir.is_dir() {
    debug!("creating {}", dest_dir.display());
    let missing = dest_dir
      .ancestors()
      .take_while(|path| !path.as_os_str().is_empty() && !path.exists())
      .count();
    fs::create_dir_all(dest_dir).map_err(|source| BuildError::CreateDir {
      path: dest_dir.to_path_buf(),
      source,
    })?;
    report.directories_created += missing;
  }

  let read_error = |source| BuildError::ReadDir {
    path: source_dir.to_path_buf(),
    source,
  };
  let mut entries = fs::read_dir(source_dir)
    .map_err(read_error)?
    .collect::<io::Result<Vec<_>>>()
    .map_err(read_error)?;
  entries.sort_by_key(|entry| entry.file_name());

  let mut written: HashSet<OsString> = HashSet::new();

  for entry in entries {
    let file_name = entry.file_name();
    let marked = file_name.to_str().map(|name| decompose(name, markers));

    let dest_name = match &marked {
      Some(marked) if !marked.belongs_to(target_marker) => {
        debug!("skipping {:?} (marked {:?})", file_name, marked.marker);
        report.skipped_entries += 1;
        continue;
      }
      Some(marked) => OsString::from(&marked.core_name),
      None => file_name.clone(),
    };

    let source_path = entry.path();
    let dest_path = dest_dir.join(&dest_name);
    let file_type = entry.file_type().map_err(read_error)?;

    if file_type.is_dir() {
      mirror_directory(&source_path, &dest_path, target_marker, markers, report)?;
    } else if file_type.is_file() {
      if marked.as_ref().is_some_and(|marked| marked.sole_suffix) {
        warn!(
          "{} has a marker as its only extension and is treated as target-specific",
          source_path.display()
        );
      }
      if !written.insert(dest_name.clone()) {
        warn!(
          "{} overwrites a file already copied to {}",
          source_path.display(),
          dest_path.display()
        );
      }

      let copied = install_file(&source_path, &dest_path).map_err(|source| BuildError::CopyFile {
        from: source_path.clone(),
        to: dest_path.clone(),
        source,
      })?;
      if copied {
        debug!("copied {} to {}", source_path.display(), dest_path.display());
        report.files_copied += 1;
      } else {
        report.unchanged_files += 1;
      }
    } else {
      debug!("ignoring special entry {}", source_path.display());
      report.ignored_entries += 1;
    }
  }

  Ok(())
}

/// Absolute, symlink-free form of `path`, even when its tail does not exist yet.
///
/// The deepest existing ancestor is canonicalized and the missing components
/// are appended to it unchanged.
fn resolve_path(path: &Path) -> PathBuf {
  let mut missing = Vec::new();
  let mut current = path;
  loop {
    if let Ok(resolved) = fs::canonicalize(current) {
      return missing
        .iter()
        .rev()
        .fold(resolved, |resolved, component| resolved.join(component));
    }
    match (current.parent(), current.file_name()) {
      (Some(parent), Some(name)) => {
        missing.push(name.to_os_string());
        current = if parent.as_os_str().is_empty() {
          Path::new(".")
        } else {
          parent
        };
      }
      _ => return path.to_path_buf(),
    }
  }
}

/// Copy `source` over `destination`, returning `false` when both already are the same file.
fn install_file(source: &Path, destination: &Path) -> io::Result<bool> {
  if destination.exists() && is_same_file(source, destination)? {
    return Ok(false);
  }

  fs::copy(source, destination)?;
  Ok(true)
}
