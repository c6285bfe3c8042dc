//! Console logging setup shared by the command line tools.

use std::env;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
///
/// An explicit `log_level` is added on top of the environment filter. Without
/// one, `RUST_LOG` applies as is and falls back to `info` when unset.
pub fn init_logging(log_level: Option<&str>) {
  tracing_subscriber::fmt()
    .with_env_filter(build_filter(log_level))
    .with_target(false)
    .with_thread_ids(false)
    .with_file(false)
    .with_line_number(false)
    .init();
}

fn build_filter(log_level: Option<&str>) -> EnvFilter {
  let from_env = env::var(EnvFilter::DEFAULT_ENV).ok();
  filter_for(from_env.as_deref(), log_level)
}

fn filter_for(from_env: Option<&str>, log_level: Option<&str>) -> EnvFilter {
  let base = from_env.and_then(|directives| EnvFilter::try_new(directives).ok());
  match (base, log_level) {
    (base, Some(log_level)) => base
      .unwrap_or_else(|| EnvFilter::new(""))
      .add_directive(parse_level(log_level).into()),
    (Some(base), None) => base,
    (None, None) => EnvFilter::new("info"),
  }
}

/// Unknown level names fall back to `info`.
fn parse_level(log_level: &str) -> Level {
  match log_level.to_lowercase().as_str() {
    "trace" => Level::TRACE,
    "debug" => Level::DEBUG,
    "info" => Level::INFO,
    "warn" => Level::WARN,
    "error" => Level::ERROR,
    _ => Level::INFO,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tracing::level_filters::LevelFilter;

  #[test]
  fn environment_filter_applies_without_flag() {
    let filter = filter_for(Some("debug"), None);
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
  }

  #[test]
  fn defaults_to_info_without_flag_or_environment() {
    assert_eq!(filter_for(None, None).max_level_hint(), Some(LevelFilter::INFO));
    assert_eq!(
      filter_for(Some("addon_builder=bogus"), None).max_level_hint(),
      Some(LevelFilter::INFO)
    );
  }

  #[test]
  fn explicit_level_overrides_environment_level() {
    let filter = filter_for(Some("warn"), Some("debug"));
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    assert_eq!(parse_level("WARN"), Level::WARN);
    assert_eq!(parse_level("loud"), Level::INFO);
  }
}
