//! Splitting entry names into a core name and an optional target marker.

use std::collections::BTreeSet;

/// An entry name decomposed into the name written to the output and its marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedName {
  /// Name with the marker segment removed.
  pub core_name: String,
  /// Marker segment without its leading dot, if the name carries one.
  pub marker: Option<String>,
  /// `true` when the marker was the name's only extension (`image.fx`).
  pub sole_suffix: bool,
}

impl MarkedName {
  fn unmarked(name: &str) -> Self {
    Self {
      core_name: name.to_string(),
      marker: None,
      sole_suffix: false,
    }
  }

  /// Whether this entry should be mirrored into the target carrying `target_marker`.
  pub fn belongs_to(&self, target_marker: &str) -> bool {
    self
      .marker
      .as_deref()
      .is_none_or(|marker| marker == target_marker)
  }
}

/// Split a name into its base and dot-prefixed suffix segments.
///
/// Leading dots stay on the base so hidden files keep their name
/// (`.hidden.fx.js` splits into `.hidden`, `.fx`, `.js`).
pub fn split_segments(name: &str) -> (&str, Vec<&str>) {
  let lead = name.len() - name.trim_start_matches('.').len();
  let rest = &name[lead..];

  let mut offsets = rest.match_indices('.').map(|(index, _)| lead + index);
  let Some(first) = offsets.next() else {
    return (name, Vec::new());
  };

  let mut suffixes = Vec::new();
  let mut start = first;
  for next in offsets {
    suffixes.push(&name[start..next]);
    start = next;
  }
  suffixes.push(&name[start..]);

  (&name[..first], suffixes)
}

/// Decompose `name` against the set of recognised markers.
///
/// With a single extension that extension is the marker candidate. With more,
/// the second-to-last one is, so a marker can sit in front of the real file
/// type (`panel.fx.js`).
pub fn decompose(name: &str, markers: &BTreeSet<&str>) -> MarkedName {
  let (base, suffixes) = split_segments(name);
  if suffixes.is_empty() {
    return MarkedName::unmarked(name);
  }

  let index = suffixes.len().saturating_sub(2);
  let candidate = &suffixes[index][1..];
  if !markers.contains(candidate) {
    return MarkedName::unmarked(name);
  }

  let mut core_name = String::with_capacity(name.len());
  core_name.push_str(base);
  for (position, suffix) in suffixes.iter().enumerate() {
    if position != index {
      core_name.push_str(suffix);
    }
  }

  MarkedName {
    core_name,
    marker: Some(candidate.to_string()),
    sole_suffix: suffixes.len() == 1,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn markers() -> BTreeSet<&'static str> {
    ["fx", "cr", "ignore"].into_iter().collect()
  }

  fn marked(core_name: &str, marker: &str, sole_suffix: bool) -> MarkedName {
    MarkedName {
      core_name: core_name.into(),
      marker: Some(marker.into()),
      sole_suffix,
    }
  }

  #[test]
  fn splits_suffixes_with_leading_dots() {
    assert_eq!(split_segments("main"), ("main", vec![]));
    assert_eq!(split_segments("a.b.c"), ("a", vec![".b", ".c"]));
    assert_eq!(split_segments(".hidden.fx.js"), (".hidden", vec![".fx", ".js"]));
    assert_eq!(split_segments("a..js"), ("a", vec![".", ".js"]));
    assert_eq!(split_segments("trailing."), ("trailing", vec!["."]));
    assert_eq!(split_segments("..."), ("...", vec![]));
  }

  #[test]
  fn names_without_dots_are_unmarked() {
    assert_eq!(decompose("README", &markers()), MarkedName::unmarked("README"));
    assert_eq!(decompose(".gitignore", &markers()), MarkedName::unmarked(".gitignore"));
  }

  #[test]
  fn strips_marker_before_final_extension() {
    assert_eq!(decompose("icon.fx.png", &markers()), marked("icon.png", "fx", false));
    assert_eq!(
      decompose("chemObjInsert.addon.cr.js", &markers()),
      marked("chemObjInsert.addon.js", "cr", false)
    );
    assert_eq!(
      decompose("panel.ignore.js", &markers()),
      marked("panel.js", "ignore", false)
    );
  }

  #[test]
  fn single_marker_suffix_is_marked() {
    assert_eq!(decompose("components.fx", &markers()), marked("components", "fx", true));
    assert_eq!(
      decompose("background.ignore", &markers()),
      marked("background", "ignore", true)
    );
  }

  #[test]
  fn unrecognised_suffixes_leave_name_untouched() {
    for name in ["common.js", "jquery.min.js", "icon.fx", "a.b.c.d"] {
      let result = decompose(name, &["cr"].into_iter().collect());
      assert_eq!(result, MarkedName::unmarked(name), "{name}");
    }
  }

  #[test]
  fn only_second_to_last_segment_is_considered() {
    assert_eq!(decompose("lib.fx.min.js", &markers()), MarkedName::unmarked("lib.fx.min.js"));
    assert_eq!(decompose("lib.min.js.fx", &markers()), MarkedName::unmarked("lib.min.js.fx"));
  }

  #[test]
  fn membership_follows_marker() {
    assert!(decompose("common.js", &markers()).belongs_to("fx"));
    assert!(decompose("icon.fx.png", &markers()).belongs_to("fx"));
    assert!(!decompose("icon.cr.png", &markers()).belongs_to("fx"));
    assert!(!decompose("panel.ignore.js", &markers()).belongs_to("fx"));
  }
}
