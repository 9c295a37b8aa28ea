//! Log output for the binaries.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to whoever drives it. Binaries call [`init`] once at startup.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "eight_puzzle_solver=info";

/// Installs a formatted `tracing` subscriber writing to stderr.
///
/// Verbosity follows `RUST_LOG` and falls back to `info` for this crate.
/// Safe to call multiple times; only the first call has an effect.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
