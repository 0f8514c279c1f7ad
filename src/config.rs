use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenomicsError};
use crate::estimator::{DEFAULT_MODEL, DEFAULT_PRICE_PER_1K_TOKENS};

/// Default input file analyzed by `tokenomics report`.
pub const DEFAULT_INPUT_PATH: &str = "outline.txt";

/// Top-level configuration for tokenomics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Model whose tokenizer is used when none is given on the CLI.
    pub model: String,
    /// Input-token price in USD per 1000 tokens.
    pub price_per_1k_tokens: f64,
    /// File analyzed by `report` when no path is given.
    pub input_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            price_per_1k_tokens: DEFAULT_PRICE_PER_1K_TOKENS,
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
        }
    }
}

// --- Config methods ---

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TokenomicsError::io(format!("reading config from '{}'", path.display()), e)
        })?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| TokenomicsError::config_with_source("failed to parse config", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| TokenomicsError::config_with_source("failed to serialize config", e))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TokenomicsError::io(format!("creating config directory '{}'", parent.display()), e)
            })?;
        }
        std::fs::write(path, content).map_err(|e| {
            TokenomicsError::io(format!("writing config to '{}'", path.display()), e)
        })
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(TokenomicsError::validation("model", "must not be empty"));
        }
        if !self.price_per_1k_tokens.is_finite() || self.price_per_1k_tokens < 0.0 {
            return Err(TokenomicsError::validation(
                "price_per_1k_tokens",
                "must be a finite number >= 0",
            ));
        }
        Ok(())
    }

    /// Merge overrides on top of this config (non-default fields win).
    pub fn merge(&mut self, overrides: Config) {
        let defaults = Config::default();
        if overrides.model != defaults.model {
            self.model = overrides.model;
        }
        if overrides.price_per_1k_tokens != defaults.price_per_1k_tokens {
            self.price_per_1k_tokens = overrides.price_per_1k_tokens;
        }
        if overrides.input_path != defaults.input_path {
            self.input_path = overrides.input_path;
        }
    }
}

/// Builder for constructing Config with selective overrides.
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn with_price(mut self, price_per_1k: f64) -> Self {
        self.config.price_per_1k_tokens = price_per_1k;
        self
    }

    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_path = path.into();
        self
    }

    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Discover the config file using standard search order:
/// 1. Explicit path (if provided)
/// 2. ./tokenomics.toml
/// 3. ~/.tokenomics.toml
/// 4. XDG config dir
pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        if p.exists() {
            return Some(p.to_path_buf());
        }
        return None;
    }

    let local = PathBuf::from("tokenomics.toml");
    if local.exists() {
        return Some(local);
    }

    if let Some(home) = dirs_home() {
        let home_config = home.join(".tokenomics.toml");
        if home_config.exists() {
            return Some(home_config);
        }
    }

    if let Some(proj_dirs) = ProjectDirs::from("", "", "tokenomics") {
        let xdg = proj_dirs.config_dir().join("tokenomics.toml");
        if xdg.exists() {
            return Some(xdg);
        }
    }

    None
}

/// Load the effective config: discovered file if any, defaults otherwise.
pub fn load_effective(explicit: Option<&Path>) -> Result<Config> {
    match find_config_file(explicit) {
        Some(path) => Config::load(&path),
        None => {
            if let Some(p) = explicit {
                return Err(TokenomicsError::invalid_path(
                    p.display().to_string(),
                    "config file does not exist",
                ));
            }
            Ok(Config::default())
        }
    }
}

fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn serde_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn validation_rejects_empty_model() {
        let mut config = Config::default();
        config.model = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_negative_price() {
        let mut config = Config::default();
        config.price_per_1k_tokens = -0.01;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_nan_price() {
        let mut config = Config::default();
        config.price_per_1k_tokens = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn builder_with_overrides() {
        let config = ConfigBuilder::new()
            .with_model("gpt-4o")
            .with_price(0.005)
            .build()
            .unwrap();
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.price_per_1k_tokens, 0.005);
    }

    #[test]
    fn merge_overrides_model_and_price() {
        let mut base = Config::default();
        let mut overrides = Config::default();
        overrides.model = "gpt-4o".into();
        overrides.price_per_1k_tokens = 0.002;
        base.merge(overrides);
        assert_eq!(base.model, "gpt-4o");
        assert_eq!(base.price_per_1k_tokens, 0.002);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenomics.toml");
        let config = Config::default();
        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn load_effective_rejects_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_effective(Some(&missing)).is_err());
    }
}
