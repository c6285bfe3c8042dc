//! Writing a quoted listing of every file below a directory.
//!
//! Each file becomes one `"prefix/relative/path",` line, which is the format the
//! add-on manifests expect when enumerating bundled style resources.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{BuildError, BuildResult};

/// Where to read from and write to when producing a file listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManifestOptions {
  /// Directory whose files are listed.
  pub root_dir: String,
  /// Prefix placed in front of every listed path instead of `root_dir`.
  pub relative_prefix: String,
  /// File the listing is written to.
  pub output_file: String,
}

impl Default for ManifestOptions {
  fn default() -> Self {
    Self {
      root_dir: "_common/data/styles/kekule".into(),
      relative_prefix: "data/styles/kekule".into(),
      output_file: "allFiles.txt".into(),
    }
  }
}

/// List every file below `root_dir` into `output_path`, creating or truncating it.
pub fn write_manifest_file(
  root_dir: &Path,
  relative_prefix: &str,
  output_path: &Path,
) -> BuildResult<usize> {
  let write_error = |source| BuildError::WriteManifest {
    path: output_path.to_path_buf(),
    source,
  };

  let file = File::create(output_path).map_err(write_error)?;
  let mut writer = BufWriter::new(file);
  let count = write_file_manifest(root_dir, relative_prefix, &mut writer).map_err(|err| match err {
    BuildError::WriteListing { source, .. } => write_error(source),
    other => other,
  })?;
  writer.flush().map_err(write_error)?;

  info!("listed {} files into {}", count, output_path.display());
  Ok(count)
}

/// List every regular file below `root_dir` into `writer`, returning the number of lines.
pub fn write_file_manifest<W: Write>(
  root_dir: &Path,
  relative_prefix: &str,
  writer: &mut W,
) -> BuildResult<usize> {
  if !root_dir.is_dir() {
    return Err(BuildError::SourceNotDirectory(root_dir.to_path_buf()));
  }

  let prefix = relative_prefix.trim_end_matches('/');
  let mut count = 0;
  list_directory(root_dir, prefix, writer, &mut count)?;
  Ok(count)
}

fn list_directory<W: Write>(
  dir: &Path,
  prefix: &str,
  writer: &mut W,
  count: &mut usize,
) -> BuildResult<()> {
  let read_error = |source| BuildError::ReadDir {
    path: dir.to_path_buf(),
    source,
  };
  let mut entries = fs::read_dir(dir)
    .map_err(read_error)?
    .collect::<io::Result<Vec<_>>>()
    .map_err(read_error)?;
  entries.sort_by_key(|entry| entry.file_name());

  for entry in entries {
    let name = entry.file_name();
    let name = name.to_string_lossy();
    let listed = if prefix.is_empty() {
      name.to_string()
    } else {
      format!("{prefix}/{name}")
    };

    // Follows symlinks, so linked files and directories are listed too.
    let path = entry.path();
    if path.is_dir() {
      list_directory(&path, &listed, writer, count)?;
    } else if path.is_file() {
      debug!("{}", path.display());
      writeln!(writer, "\"{listed}\",").map_err(|source| BuildError::WriteListing {
        entry: path.clone(),
        source,
      })?;
      *count += 1;
    }
  }

  Ok(())
}
