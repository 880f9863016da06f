//! User defaults for the command line tool.
//!
//! Stored at `<config dir>/liftcalc/config.toml`. A missing file is the same
//! as an empty one.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{
    bar::default_bar_weight,
    output::OutputFormat,
    unit::{MeasurementSystem, WeightUnit},
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine the user config directory.")]
    NoConfigDir,

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Bar weight for {0} must be greater than 0.")]
    InvalidBarWeight(WeightUnit),
}

/// Bar weights to use instead of the standard 20 kg / 45 lbs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarWeights {
    pub kg: Option<f64>,
    pub lbs: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Unit for the plate and one-rep-max calculators.
    pub unit: WeightUnit,

    /// Unit system for body measurements.
    pub system: MeasurementSystem,

    pub format: OutputFormat,

    pub bar: BarWeights,
}

impl Config {
    /// # Errors
    /// If the platform has no config directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("liftcalc")
            .join("config.toml"))
    }

    /// Loads from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// # Errors
    /// If the file exists but cannot be read or parsed, or sets a
    /// non-positive bar weight.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&Self::default_path()?),
        }
    }

    /// # Errors
    /// See [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for unit in [WeightUnit::Kg, WeightUnit::Lbs] {
            if self.bar_override(unit).is_some_and(|weight| weight <= 0.0 || !weight.is_finite()) {
                return Err(ConfigError::InvalidBarWeight(unit));
            }
        }
        Ok(())
    }

    fn bar_override(&self, unit: WeightUnit) -> Option<f64> {
        match unit {
            WeightUnit::Kg => self.bar.kg,
            WeightUnit::Lbs => self.bar.lbs,
        }
    }

    /// Configured bar weight for `unit`, falling back to the standard bar.
    #[must_use]
    pub fn bar_weight(&self, unit: WeightUnit) -> f64 {
        self.bar_override(unit)
            .unwrap_or_else(|| default_bar_weight(unit))
    }
}
