use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Separator joining nested keys into flat column names
    #[serde(default = "default_flatten_separator")]
    pub flatten_separator: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_flatten_separator() -> String {
    sensorflow_payload::DEFAULT_SEPARATOR.to_string()
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .add_source(Environment::default())
            .build()?
            .try_deserialize()?;

        if config.flatten_separator.is_empty() {
            return Err(ConfigError::Message(
                "FLATTEN_SEPARATOR must not be empty".to_string(),
            ));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure tests run serially and don't interfere with each other
    static TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let _lock = TEST_LOCK.lock().unwrap();

        std::env::remove_var("LOG_LEVEL");
        std::env::remove_var("FLATTEN_SEPARATOR");

        let config = ServiceConfig::from_env().unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.flatten_separator, ".");
    }

    #[test]
    fn test_custom_config() {
        let _lock = TEST_LOCK.lock().unwrap();

        std::env::set_var("LOG_LEVEL", "debug");
        std::env::set_var("FLATTEN_SEPARATOR", "__");

        let config = ServiceConfig::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.flatten_separator, "__");

        // Clean up
        std::env::remove_var("LOG_LEVEL");
        std::env::remove_var("FLATTEN_SEPARATOR");
    }

    #[test]
    fn test_empty_separator_rejected() {
        let _lock = TEST_LOCK.lock().unwrap();

        std::env::set_var("FLATTEN_SEPARATOR", "");

        let result = ServiceConfig::from_env();
        assert!(matches!(result, Err(ConfigError::Message(_))));

        std::env::remove_var("FLATTEN_SEPARATOR");
    }
}
