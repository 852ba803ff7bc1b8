//! Configuration management for `ThermoGate`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::ThermoGateError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::conversion::{DEFAULT_DECIMAL_PLACES, DEFAULT_TOLERANCE};

const MAX_DECIMAL_PLACES: usize = 10;

/// Root configuration structure for the `ThermoGate` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThermoGateConfig {
    /// Conversion defaults
    #[serde(default)]
    pub conversion: ConversionConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults applied by the conversion service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Digits after the decimal point in formatted output
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,
    /// Tolerance for freezing and boiling point checks, in degrees Celsius
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_decimal_places() -> usize {
    DEFAULT_DECIMAL_PLACES
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            decimal_places: default_decimal_places(),
            tolerance: default_tolerance(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ThermoGateConfig {
    /// Load configuration from the given path, or the default location when `None`,
    /// then apply environment overrides
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // THERMOGATE_CONVERSION__DECIMAL_PLACES=3 and friends
        builder = builder.add_source(
            Environment::with_prefix("THERMOGATE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: ThermoGateConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("thermogate").join("config.toml"))
    }

    /// Replace empty string settings with their defaults
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.conversion.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ThermoGateError::config(format!(
                "Decimal places cannot exceed {MAX_DECIMAL_PLACES}"
            ))
            .into());
        }

        let tolerance = self.conversion.tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ThermoGateError::config(
                "Tolerance must be a finite, non-negative number",
            )
            .into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(ThermoGateError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(ThermoGateError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
