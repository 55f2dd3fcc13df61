//! Logging setup
//!
//! The library itself only talks to the standard `log` facade (`debug!`,
//! `warn!`, ...). Applications embedding it can call [`init_logging`] once at
//! startup to install `env_logger` with the configured level, or wire up any
//! other `log` backend themselves.

use crate::config::LoggingConfig;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging from configuration
///
/// Safe to call multiple times; only the first call installs a logger. If the
/// host application already installed a different logger this is a no-op.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        let result = env_logger::Builder::new()
            .filter_level(config.level_filter())
            .format_timestamp_millis()
            .try_init();

        if result.is_ok() {
            log::debug!("Logging initialized at level {}", config.level_filter());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        let config = LoggingConfig { level: "debug".to_string() };
        init_logging(&config);
        init_logging(&config);
        log::debug!("still alive");
    }
}
