//! Logger setup
//!
//! Logs go to stderr through `env_logger`. `RUST_LOG` overrides the level
//! picked from the verbosity flag.

use env_logger::Env;
use log::SetLoggerError;

/// Default filter for a `-v` count
#[must_use]
pub const fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global logger
///
/// # Errors
///
/// Returns an error if a logger was already installed.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbosity)))
        .format_timestamp(None)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(1), "info");
        assert_eq!(default_filter(2), "debug");
        assert_eq!(default_filter(5), "trace");
    }
}
