//! Diagnostic tracing on stderr.
//!
//! Stdout belongs to the runner's workflow commands, so diagnostics never go
//! there. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Set by the runner when step debug logging is enabled.
pub const RUNNER_DEBUG_ENV: &str = "RUNNER_DEBUG";

/// Filter used when `RUST_LOG` is not set.
#[must_use]
pub fn default_directive(runner_debug: bool) -> &'static str {
    if runner_debug {
        "shardcloud_action=debug"
    } else {
        "shardcloud_action=warn"
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let runner_debug = std::env::var(RUNNER_DEBUG_ENV).is_ok_and(|v| v == "1");

    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(runner_debug).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true), "shardcloud_action=debug");
        assert_eq!(default_directive(false), "shardcloud_action=warn");
    }
}
