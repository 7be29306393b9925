//! Logging setup.
//!
//! Logs go to stderr through `tracing-subscriber` so that stdout carries only
//! the rendered tree. The filter comes from the `MEMTREE_LOG` environment
//! variable when set (same syntax as `RUST_LOG`), otherwise from the number of
//! `-v` flags.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit log filter.
pub const LOG_ENV: &str = "MEMTREE_LOG";

/// Maps a `-v` count to a default level.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber.
pub fn init(verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "trace");
    }
}
