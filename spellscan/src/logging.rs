// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Default filter for a given `-v` count.
#[inline]
#[must_use]
pub const fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs a stderr subscriber. `RUST_LOG` overrides the `-v` level.
///
/// Stdout is left alone: it carries the command line or the exit status.
#[inline]
pub fn init(verbose: u8) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
