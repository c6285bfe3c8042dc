//! Registry of the browser targets a build can produce, plus target selection.

use std::collections::BTreeSet;

/// Marker reserved for sources that must never reach any target.
pub const IGNORE_MARKER: &str = "ignore";

/// A named build output with its own directory and file marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
  /// Identifier accepted on the command line.
  pub name: &'static str,
  /// Output directory relative to the build output root.
  pub directory: &'static str,
  /// Marker segment (without the leading dot) that assigns a source to this target.
  pub marker: &'static str,
}

/// Every buildable target, in build order.
pub const TARGETS: &[Target] = &[
  Target {
    name: "firefox",
    directory: "firefox/kekule",
    marker: "fx",
  },
  Target {
    name: "chrome",
    directory: "chrome/kekule",
    marker: "cr",
  },
];

/// Which targets a build run should produce.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TargetSelection {
  /// Build every registered target.
  #[default]
  All,
  /// Build only the target with this name.
  Named(String),
}

impl TargetSelection {
  /// Interpret the optional positional argument of the build command.
  pub fn from_arg(arg: Option<&str>) -> Self {
    match arg {
      Some(name) => Self::Named(name.to_string()),
      None => Self::All,
    }
  }
}

/// Resolve a selection to the targets it names.
///
/// An unknown name resolves to nothing. The sentinel `ignore` marker is not a
/// target, so asking for it also resolves to nothing.
pub fn select_targets(selection: &TargetSelection) -> Vec<&'static Target> {
  match selection {
    TargetSelection::All => TARGETS.iter().collect(),
    TargetSelection::Named(name) => find_target(name).into_iter().collect(),
  }
}

/// Look up a registered target by name.
pub fn find_target(name: &str) -> Option<&'static Target> {
  TARGETS.iter().find(|target| target.name == name)
}

/// Every marker recognised in source names, the sentinel included.
pub fn all_markers() -> BTreeSet<&'static str> {
  TARGETS
    .iter()
    .map(|target| target.marker)
    .chain(std::iter::once(IGNORE_MARKER))
    .collect()
}
