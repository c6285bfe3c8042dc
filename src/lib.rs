#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod copier;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod marker;
pub mod targets;

pub use builder::{AddonBuilder, BuildContext, BuildReport, TargetReport};
pub use config::BuildConfig;
pub use copier::{CopyReport, copy_subtree};
pub use error::{BuildError, BuildResult};
pub use manifest::{ManifestOptions, write_file_manifest, write_manifest_file};
pub use marker::{MarkedName, decompose};
pub use targets::{IGNORE_MARKER, TARGETS, Target, TargetSelection, all_markers, select_targets};
