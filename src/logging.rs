//! Tracing setup for the binary
//!
//! Library code only emits `tracing` events; the binary installs the
//! subscriber once at startup. Output goes to stderr so it never mixes with
//! command output.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "iou_ledger=warn";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber; later calls do nothing
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A subscriber installed elsewhere (e.g. by a test harness) wins
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::debug!("tracing initialised twice without panicking");
    }
}
