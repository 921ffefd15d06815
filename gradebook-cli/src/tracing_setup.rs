//! Tracing setup for the gradebook CLI
//!
//! Usage:
//!   gradebook --debug ...               # Debug logging (statements and parameters)
//!   gradebook --quiet ...               # Warnings and errors only
//!   RUST_LOG=gradebook_core=debug gradebook demo
//!
//! RUST_LOG, when set, always wins over the flags.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConfig {
    /// Enable debug logging
    pub debug: bool,
    /// Only log warnings and errors
    pub quiet: bool,
}

impl TracingConfig {
    fn default_directive(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_wins_over_quiet() {
        let config = TracingConfig {
            debug: true,
            quiet: true,
        };
        assert_eq!(config.default_directive(), "debug");
    }

    #[test]
    fn default_level_is_info() {
        assert_eq!(TracingConfig::default().default_directive(), "info");
    }

    #[test]
    fn quiet_keeps_warnings_and_errors_only() {
        let quiet = TracingConfig {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(quiet.default_directive(), "warn");
    }
}
