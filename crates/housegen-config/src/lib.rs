//! # housegen-config
//!
//! Layered configuration loading for housegen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HOUSEGEN_*` prefix, `__` as separator)
//! 2. An explicit file passed by the caller (`--config`)
//! 3. Project-level `./housegen.toml`
//! 4. User-level `~/.config/housegen/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `HOUSEGEN_GENERATION__SEED` -> `generation.seed`,
//! `HOUSEGEN_STORE__SLOT_CAPACITY` -> `store.slot_capacity`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use housegen_config::HousegenConfig;
//!
//! let config = HousegenConfig::load_with_dotenv(None).expect("config");
//! println!("store ceiling: {}", config.store.ceiling());
//! ```

mod error;
mod generation;
mod paths;
mod pricing;
mod store;

pub use error::ConfigError;
pub use generation::GenerationConfig;
pub use paths::PathsConfig;
pub use pricing::PricingConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "housegen.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HousegenConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl HousegenConfig {
    /// Load and validate configuration from all sources.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(extra).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv(extra: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load(extra)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = extra {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed("HOUSEGEN_").split("__"))
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store.validate()?;
        self.generation.validate()?;
        self.pricing.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("housegen").join("config.toml"))
    }
}
