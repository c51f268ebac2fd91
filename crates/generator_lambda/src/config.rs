use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    /// Kinesis data stream readings are written to (STREAM_NAME, required)
    pub stream_name: String,

    /// Partition key attached to every record
    #[serde(default = "default_partition_key")]
    pub partition_key: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional Kinesis endpoint override, e.g. for a local stack
    #[serde(default)]
    pub kinesis_endpoint_url: Option<String>,
}

fn default_partition_key() -> String {
    sensorflow_kinesis::DEFAULT_PARTITION_KEY.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .add_source(Environment::default())
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.stream_name.trim().is_empty() {
            return Err(ConfigError::Message(
                "STREAM_NAME must not be empty".to_string(),
            ));
        }

        // Kinesis accepts partition keys of 1 to 256 characters
        let key_len = self.partition_key.chars().count();
        if key_len == 0 || key_len > 256 {
            return Err(ConfigError::Message(format!(
                "PARTITION_KEY must be 1-256 characters, got {}",
                key_len
            )));
        }

        Ok(())
    }
}
