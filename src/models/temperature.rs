//! Temperature value model and display methods

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::conversion::{self, DEFAULT_DECIMAL_PLACES};
use crate::error::ConversionError;
use crate::models::{TemperatureCategory, TemperatureUnit};

/// A value on one of the supported scales
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub value: f64,
    pub unit: TemperatureUnit,
}

impl Temperature {
    #[must_use]
    pub fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    #[must_use]
    pub fn celsius(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    /// Convert to another scale, same rules as [`conversion::convert_between`]
    pub fn convert_to(self, unit: TemperatureUnit) -> Result<Self, ConversionError> {
        conversion::convert_between(self.value, self.unit, unit).map(|value| Self::new(value, unit))
    }

    /// Value on the Celsius pivot scale
    pub fn to_celsius(self) -> Result<f64, ConversionError> {
        conversion::convert_between(self.value, self.unit, TemperatureUnit::Celsius)
    }

    /// Band of this temperature, validated against absolute zero
    pub fn category(self) -> Result<TemperatureCategory, ConversionError> {
        conversion::classify(self.to_celsius()?)
    }

    /// Format with a fixed number of decimal places and the unit symbol
    #[must_use]
    pub fn format(&self, decimal_places: usize) -> String {
        conversion::format_with_unit(self.value, self.unit, decimal_places)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_DECIMAL_PLACES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_defaults_to_two_decimals() {
        assert_eq!(Temperature::celsius(25.5).to_string(), "25.50°C");
        assert_eq!(
            Temperature::new(298.15, TemperatureUnit::Kelvin).to_string(),
            "298.15K"
        );
    }

    #[test]
    fn test_convert_to() {
        let boiling = Temperature::celsius(100.0)
            .convert_to(TemperatureUnit::Fahrenheit)
            .unwrap();
        assert_eq!(boiling.value, 212.0);
        assert_eq!(boiling.unit, TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn test_category_goes_through_celsius() {
        let room = Temperature::new(77.0, TemperatureUnit::Fahrenheit);
        assert_eq!(room.category().unwrap(), TemperatureCategory::Warm);
    }

    #[test]
    fn test_category_rejects_below_absolute_zero() {
        let impossible = Temperature::new(-10.0, TemperatureUnit::Kelvin);
        assert!(matches!(
            impossible.category(),
            Err(ConversionError::BelowAbsoluteZero { .. })
        ));
    }

    #[test]
    fn test_serializes_unit_by_name() {
        let json = serde_json::to_string(&Temperature::celsius(1.0)).unwrap();
        assert_eq!(json, r#"{"value":1.0,"unit":"Celsius"}"#);
    }
}
