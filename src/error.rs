//! Error types and handling for `ThermoGate`

use thiserror::Error;

use crate::auth::AuthError;
use crate::models::TemperatureUnit;

/// Failures raised by the conversion engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Unit code outside C, F, K, R after normalization
    #[error("Invalid unit '{unit}'. Use one of: C, F, K, R")]
    InvalidUnit { unit: String },

    /// Value colder than the physical minimum of its scale
    #[error("{value} is below absolute zero for {scale} ({floor})", floor = .scale.absolute_zero())]
    BelowAbsoluteZero { scale: TemperatureUnit, value: f64 },
}

impl ConversionError {
    /// Create a new invalid unit error from the raw, unnormalized input
    pub fn invalid_unit<S: Into<String>>(unit: S) -> Self {
        Self::InvalidUnit { unit: unit.into() }
    }

    #[must_use]
    pub fn below_absolute_zero(scale: TemperatureUnit, value: f64) -> Self {
        Self::BelowAbsoluteZero { scale, value }
    }
}

/// Main error type for the `ThermoGate` application
#[derive(Error, Debug)]
pub enum ThermoGateError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Credential gate errors
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Conversion engine errors
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ThermoGateError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ThermoGateError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            ThermoGateError::Validation { message } => format!("Invalid input: {message}"),
            ThermoGateError::Auth(err) => format!("Access denied: {err}"),
            ThermoGateError::Conversion(err) => err.to_string(),
            ThermoGateError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = ThermoGateError::config("bad decimals");
        assert!(matches!(config_err, ThermoGateError::Config { .. }));

        let validation_err = ThermoGateError::validation("not a number");
        assert!(matches!(validation_err, ThermoGateError::Validation { .. }));
    }

    #[test]
    fn test_conversion_messages() {
        let err = ConversionError::invalid_unit("X");
        assert_eq!(err.to_string(), "Invalid unit 'X'. Use one of: C, F, K, R");

        let err = ConversionError::below_absolute_zero(TemperatureUnit::Kelvin, -10.0);
        assert_eq!(err.to_string(), "-10 is below absolute zero for Kelvin (0)");
    }

    #[test]
    fn test_user_messages() {
        let config_err = ThermoGateError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = ThermoGateError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));

        let conversion_err: ThermoGateError = ConversionError::invalid_unit("Q").into();
        assert!(conversion_err.user_message().contains("'Q'"));

        let auth_err: ThermoGateError = AuthError::AdminRequired.into();
        assert!(auth_err.user_message().starts_with("Access denied"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ThermoGateError = io_err.into();
        assert!(matches!(err, ThermoGateError::Io { .. }));
    }
}
