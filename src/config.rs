//! TOML configuration: engine search settings and app settings.

use std::path::Path;

use crate::board::Side;
use crate::error::ConfigError;
use crate::eval::EvalWeights;
use crate::search::DEFAULT_DEPTH;

/// Deepest search the configuration accepts
pub const MAX_DEPTH: u8 = 10;

/// Engine settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies
    pub depth: u8,
    /// Alpha-beta cutoffs on (off gives plain minimax, same moves)
    pub pruning: bool,
    pub weights: EvalWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: DEFAULT_DEPTH,
            pruning: true,
            weights: EvalWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "engine.depth must be in 1..={MAX_DEPTH}"
            )));
        }
        let w = &self.weights;
        if w.corner < 0 || w.mobility < 0 || w.material < 0 {
            return Err(ConfigError::Validation(
                "engine.weights must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    /// Side the human plays against the engine
    pub human_side: Side,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            engine: EngineConfig::default(),
            human_side: Side::Black,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()
    }
}
