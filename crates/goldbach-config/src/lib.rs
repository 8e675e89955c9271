//! # goldbach-config
//!
//! Layered configuration loading for the Goldbach verifier using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GOLDBACH_*` prefix, `__` as separator)
//! 2. Project-level `.goldbach/config.toml`
//! 3. User-level `~/.config/goldbach/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GOLDBACH_VERIFY__BOUND` -> `verify.bound`,
//! `GOLDBACH_OUTPUT__DIR` -> `output.dir`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use goldbach_config::GoldbachConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = GoldbachConfig::load_with_dotenv().expect("config");
//!
//! println!("verifying up to {}", config.verify.bound);
//! ```

mod error;
mod output;
mod runtime;
mod sampling;
mod verify;

pub use error::ConfigError;
pub use output::OutputConfig;
pub use runtime::RuntimeConfig;
pub use sampling::SamplingConfig;
pub use verify::VerifyConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GoldbachConfig {
    #[serde(default)]
    pub verify: VerifyConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

impl GoldbachConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Figment extraction failures.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Figment extraction failures.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Load with an extra TOML file merged on top of the project layers
    /// (used by the CLI's `--config` flag). Environment variables still
    /// win over the extra file.
    ///
    /// # Errors
    ///
    /// Figment extraction failures.
    pub fn load_with_file(extra: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        let mut figment = Self::figment_without_env();
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed("GOLDBACH_").split("__"));
        figment.extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_without_env().merge(Env::prefixed("GOLDBACH_").split("__"))
    }

    fn figment_without_env() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".goldbach/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("goldbach").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if no `.env` is
    /// found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = GoldbachConfig::default();
        assert_eq!(config.verify.bound, 1_000_000);
        assert_eq!(config.verify.start, 4);
        assert_eq!(config.verify.end, 0);
        assert_eq!(config.sampling.sample_interval, 10_000);
        assert_eq!(config.sampling.progress_interval, 50_000);
        assert_eq!(config.runtime.threads, 1);
        assert!(!config.output.stream_records);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = GoldbachConfig::figment();
        let config: GoldbachConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.verify.bound, 1_000_000);
        assert_eq!(config.output.dir, "goldbach-out");
        assert_eq!(config.output.stem, "goldbach-report");
    }
}
