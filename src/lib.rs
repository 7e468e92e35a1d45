#![deny(clippy::unwrap_used)]
pub mod math;
pub mod movement;
pub mod trajectories;

use std::time::Duration;

use tracing_subscriber::EnvFilter;

/// Tick of the replay loops driven by the binaries.
pub const CONTROL_PERIOD: Duration = Duration::from_millis(16);

/// Installs a `tracing` subscriber filtered by `RUST_LOG`, `info` by default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // a second install is a no-op
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
