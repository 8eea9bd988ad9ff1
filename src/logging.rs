//! Logging setup
//!
//! `log` macros throughout the crate, `env_logger` as the backend. `RUST_LOG`
//! overrides the level picked from the `-v` count.

use env_logger::Env;

/// Default filter for a given number of `-v` flags
#[must_use]
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global logger
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbosity: u8) {
    let env = Env::default().default_filter_or(level_for(verbosity));
    if env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init()
        .is_err()
    {
        log::trace!("Logger already initialised");
    }
}
