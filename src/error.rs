//! Error type shared by the build and manifest helpers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type BuildResult<T> = Result<T, BuildError>;

/// Filesystem failures that abort a build or manifest run.
#[derive(Error, Debug)]
pub enum BuildError {
  /// The source root is missing or is not a directory.
  #[error("source is not a directory: {}", .0.display())]
  SourceNotDirectory(PathBuf),

  /// The destination lies inside the source tree it would be copied from.
  #[error(
    "destination {} is inside source {}",
    dest_dir.display(),
    source_dir.display()
  )]
  DestinationInsideSource {
    /// Resolved source directory.
    source_dir: PathBuf,
    /// Resolved destination directory.
    dest_dir: PathBuf,
  },

  /// A destination directory could not be created.
  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir {
    /// Directory that could not be created.
    path: PathBuf,
    /// Underlying I/O error.
    source: io::Error,
  },

  /// A source directory could not be listed.
  #[error("failed to read directory {}: {source}", path.display())]
  ReadDir {
    /// Directory that could not be listed.
    path: PathBuf,
    /// Underlying I/O error.
    source: io::Error,
  },

  /// A file could not be copied into the destination tree.
  #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
  CopyFile {
    /// Source file.
    from: PathBuf,
    /// Destination file.
    to: PathBuf,
    /// Underlying I/O error.
    source: io::Error,
  },

  /// A listing line could not be written to the manifest writer.
  #[error("failed to write listing entry for {}: {source}", entry.display())]
  WriteListing {
    /// File whose line was being written.
    entry: PathBuf,
    /// Underlying I/O error.
    source: io::Error,
  },

  /// The file manifest could not be written.
  #[error("failed to write manifest {}: {source}", path.display())]
  WriteManifest {
    /// Manifest output path.
    path: PathBuf,
    /// Underlying I/O error.
    source: io::Error,
  },
}
