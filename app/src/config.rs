//! # Application Configuration
//!
//! Optional YAML settings file for the business manager.
//!
//! ## Lookup order
//!
//! 1. The path passed with `--config`
//! 2. `config.yaml` in the platform config directory for `business-manager`
//!    (e.g. `~/.config/business-manager/config.yaml` on Linux)
//! 3. Built-in defaults
//!
//! ## YAML Format
//!
//! ```yaml
//! tax_rate_basis_points: 1800
//! currency_symbol: "₹"
//! default_language: en
//! start_offline: false
//! export_dir: "~/Documents/shop-exports"
//! log_filter: info
//! ```
//!
//! Every key is optional. A missing file means defaults; a file that exists
//! but does not parse is an error.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::Language;
use thiserror::Error;

use crate::backend::domain::PricingConfig;

pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Highest accepted tax rate, 100%
pub const MAX_TAX_RATE_BASIS_POINTS: u64 = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid config file {path}: tax_rate_basis_points {value} is above {max} (100%)")]
    TaxRateOutOfRange { path: PathBuf, value: u64, max: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Invoice tax rate, 1800 = 18%
    pub tax_rate_basis_points: u64,
    pub currency_symbol: String,
    /// Language used before onboarding picks one
    pub default_language: Language,
    pub start_offline: bool,
    /// Overrides the documents folder for exports
    pub export_dir: Option<PathBuf>,
    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let pricing = PricingConfig::default();
        Self {
            tax_rate_basis_points: pricing.tax_rate_basis_points,
            currency_symbol: pricing.currency_symbol,
            default_language: Language::En,
            start_offline: false,
            export_dir: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from an explicit path, else the default location, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match default_config_path() {
                Some(path) => Self::load_from(&path),
                None => {
                    debug!("No config directory on this platform, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load a YAML file; a file that does not exist yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&yaml_content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.tax_rate_basis_points > MAX_TAX_RATE_BASIS_POINTS {
            return Err(ConfigError::TaxRateOutOfRange {
                path: path.to_path_buf(),
                value: config.tax_rate_basis_points,
                max: MAX_TAX_RATE_BASIS_POINTS,
            });
        }

        info!("⚙️ Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    pub fn pricing(&self) -> PricingConfig {
        PricingConfig {
            tax_rate_basis_points: self.tax_rate_basis_points,
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}

/// `config.yaml` inside the platform config directory for the app
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "business-manager").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.tax_rate_basis_points, 1800);
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.default_language, Language::En);
        assert!(!config.start_offline);
        assert_eq!(config.export_dir, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = AppConfig::from_yaml("default_language: hi\nstart_offline: true\n").unwrap();
        assert_eq!(config.default_language, Language::Hi);
        assert!(config.start_offline);
        assert_eq!(config.tax_rate_basis_points, 1800);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load(Some(&temp_dir.path().join("absent.yaml"))).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "tax_rate_basis_points: 500\ncurrency_symbol: \"Rs \"\nexport_dir: /tmp/exports\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.pricing().tax_rate_basis_points, 500);
        assert_eq!(config.pricing().currency_symbol, "Rs ");
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/exports")));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "tax_rate_basis_points: lots\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_tax_rate_above_hundred_percent_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "tax_rate_basis_points: 18446744073709551615\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TaxRateOutOfRange { value: u64::MAX, max: 10_000, .. }
        ));
    }

    #[test]
    fn test_full_tax_rate_is_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "tax_rate_basis_points: 10000\n").unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap().tax_rate_basis_points, 10_000);
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        assert!(AppConfig::from_yaml("default_language: fr\n").is_err());
    }
}
