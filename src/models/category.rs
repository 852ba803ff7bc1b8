//! Descriptive bands for Celsius values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seven ordered bands, coldest first.
///
/// Bands are half-open on Celsius: each lower edge is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureCategory {
    /// Below -50 °C
    ExtremelyCold,
    /// -50 °C up to 0 °C
    VeryCold,
    /// 0 °C up to 10 °C
    Cold,
    /// 10 °C up to 20 °C
    Cool,
    /// 20 °C up to 30 °C
    Warm,
    /// 30 °C up to 40 °C
    Hot,
    /// 40 °C and above
    VeryHot,
}

impl TemperatureCategory {
    /// Band for a Celsius value. No absolute-zero check happens here.
    #[must_use]
    pub fn from_celsius(celsius: f64) -> Self {
        match celsius {
            c if c < -50.0 => Self::ExtremelyCold,
            c if c < 0.0 => Self::VeryCold,
            c if c < 10.0 => Self::Cold,
            c if c < 20.0 => Self::Cool,
            c if c < 30.0 => Self::Warm,
            c if c < 40.0 => Self::Hot,
            _ => Self::VeryHot,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ExtremelyCold => "extremely cold",
            Self::VeryCold => "very cold",
            Self::Cold => "cold",
            Self::Cool => "cool",
            Self::Warm => "warm",
            Self::Hot => "hot",
            Self::VeryHot => "very hot",
        }
    }
}

impl fmt::Display for TemperatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
