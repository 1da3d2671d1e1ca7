//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Filter defaults to `info` and is overridable via `CAMTUNE_LOG`
/// (standard env-filter syntax). Safe to call more than once; subsequent
/// calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("CAMTUNE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
