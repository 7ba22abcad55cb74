//! Configuration management for the construct comparison pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{CONSTRUCT_SIM_ENV}.toml (environment-specific)
    /// 3. Environment variables with CONSTRUCT_SIM_ prefix
    pub fn load() -> CoreResult<Self> {
        let env = std::env::var("CONSTRUCT_SIM_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("CONSTRUCT_SIM").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CoreError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> CoreResult<()> {
        if self.embedding.dimension == 0 {
            return Err(CoreError::ConfigError(
                "embedding.dimension must be greater than 0".into(),
            ));
        }

        if self.embedding.max_input_length == 0 {
            return Err(CoreError::ConfigError(
                "embedding.max_input_length must be greater than 0".into(),
            ));
        }

        if self.pipeline.duplicate_tolerance < 0.0 {
            return Err(CoreError::ConfigError(
                "pipeline.duplicate_tolerance must not be negative".into(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbeddingConfig {
    /// Provider model identifier. "stub" selects the deterministic
    /// development embedder.
    pub model: String,
    pub dimension: usize,
    pub max_input_length: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: "stub".to_string(),
            dimension: 384,
            max_input_length: 512,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Tolerance under which a restated reference pair counts as identical
    /// rather than conflicting.
    pub duplicate_tolerance: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            duplicate_tolerance: 1e-6,
        }
    }
}
