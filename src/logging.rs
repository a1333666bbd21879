//! Diagnostic logging setup
//!
//! Library code emits `tracing` events; the binary calls [`init`] once to
//! print them to stderr.

use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber
///
/// `RUST_LOG` wins when set; otherwise events from this crate at
/// `default_level` and above are shown. Calling this twice is a no-op.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pokefetch={default_level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
