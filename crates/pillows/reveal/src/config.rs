//! Configuration for trait queries and logging

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitsConfig {
    /// Range query tuning
    #[serde(default)]
    pub query: QueryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Range query tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Indices derived per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Derive each chunk on the rayon pool
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Report progress every this many percent of the window (1..=100)
    #[serde(default = "default_progress_step")]
    pub progress_step_percent: u8,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            parallel: true,
            progress_step_percent: default_progress_step(),
        }
    }
}

impl QueryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::Invalid(
                "query.chunk_size must be at least 1".to_string(),
            ));
        }
        if !(1..=100).contains(&self.progress_step_percent) {
            return Err(ConfigError::Invalid(format!(
                "query.progress_step_percent must be within 1..=100, got {}",
                self.progress_step_percent
            )));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_true() -> bool {
    true
}

fn default_chunk_size() -> usize {
    256
}

fn default_progress_step() -> u8 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TraitsConfig {
    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// Environment variables use the `PILLOWS_` prefix and `__` between
    /// sections, e.g. `PILLOWS_QUERY__CHUNK_SIZE=512`.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        // Add default configuration
        builder = builder.add_source(config::Config::try_from(&TraitsConfig::default())?);

        // Add file configuration if provided
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PILLOWS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: TraitsConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.query.validate()?;
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
