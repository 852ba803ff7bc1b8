//! Temperature scales and their parsing rules

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConversionError;

/// The four supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Reaumur,
}

impl TemperatureUnit {
    /// All scales in their canonical order
    pub const ALL: [TemperatureUnit; 4] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Reaumur,
    ];

    /// Parse a single-letter unit code.
    ///
    /// Codes are case-insensitive and surrounding whitespace is ignored.
    /// The error carries the raw input, not the normalized form.
    pub fn parse(code: &str) -> Result<Self, ConversionError> {
        match code.trim().to_ascii_uppercase().as_str() {
            "C" => Ok(Self::Celsius),
            "F" => Ok(Self::Fahrenheit),
            "K" => Ok(Self::Kelvin),
            "R" => Ok(Self::Reaumur),
            _ => Err(ConversionError::invalid_unit(code)),
        }
    }

    /// Canonical single-letter code
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::Celsius => 'C',
            Self::Fahrenheit => 'F',
            Self::Kelvin => 'K',
            Self::Reaumur => 'R',
        }
    }

    /// Display suffix used when formatting values. Kelvin has no degree glyph.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
            Self::Reaumur => "°R",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
            Self::Kelvin => "Kelvin",
            Self::Reaumur => "Réaumur",
        }
    }

    /// Lowest physically meaningful value on this scale
    #[must_use]
    pub fn absolute_zero(self) -> f64 {
        match self {
            Self::Celsius => -273.15,
            Self::Fahrenheit => -459.67,
            Self::Kelvin => 0.0,
            Self::Reaumur => -218.52,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
