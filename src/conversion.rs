//! Temperature Conversion Engine
//!
//! Validated conversion among Celsius, Fahrenheit, Kelvin and Réaumur,
//! classification of Celsius values into descriptive bands, proximity
//! checks against reference points, and display formatting.
//!
//! Every non-identity conversion pivots through Celsius. Each hop validates
//! the floor of the scale it reads from, so a Celsius source is only checked
//! on its way out and a Celsius target is returned without a second check.
//! Converting a unit to itself returns the value untouched, including values
//! below absolute zero.

use tracing::debug;

use crate::error::ConversionError;
use crate::models::{TemperatureCategory, TemperatureUnit};

/// Decimal places used when the caller does not ask for a precision
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

/// Tolerance used for reference point checks, in degrees Celsius
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Freezing point of water in Celsius
pub const FREEZING_POINT_C: f64 = 0.0;

/// Boiling point of water in Celsius at standard pressure
pub const BOILING_POINT_C: f64 = 100.0;

const KELVIN_OFFSET: f64 = 273.15;

fn ensure_above_absolute_zero(value: f64, scale: TemperatureUnit) -> Result<f64, ConversionError> {
    if value < scale.absolute_zero() {
        debug!(value, scale = %scale, "Rejected value below absolute zero");
        return Err(ConversionError::below_absolute_zero(scale, value));
    }
    Ok(value)
}

/// F = C × 9/5 + 32
pub fn celsius_to_fahrenheit(celsius: f64) -> Result<f64, ConversionError> {
    let celsius = ensure_above_absolute_zero(celsius, TemperatureUnit::Celsius)?;
    Ok(celsius * 9.0 / 5.0 + 32.0)
}

/// C = (F − 32) × 5/9
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> Result<f64, ConversionError> {
    let fahrenheit = ensure_above_absolute_zero(fahrenheit, TemperatureUnit::Fahrenheit)?;
    Ok((fahrenheit - 32.0) * 5.0 / 9.0)
}

/// K = C + 273.15
pub fn celsius_to_kelvin(celsius: f64) -> Result<f64, ConversionError> {
    let celsius = ensure_above_absolute_zero(celsius, TemperatureUnit::Celsius)?;
    Ok(celsius + KELVIN_OFFSET)
}

/// C = K − 273.15
pub fn kelvin_to_celsius(kelvin: f64) -> Result<f64, ConversionError> {
    let kelvin = ensure_above_absolute_zero(kelvin, TemperatureUnit::Kelvin)?;
    Ok(kelvin - KELVIN_OFFSET)
}

/// R = C × 4/5
pub fn celsius_to_reaumur(celsius: f64) -> Result<f64, ConversionError> {
    let celsius = ensure_above_absolute_zero(celsius, TemperatureUnit::Celsius)?;
    Ok(celsius * 4.0 / 5.0)
}

/// C = R × 5/4
pub fn reaumur_to_celsius(reaumur: f64) -> Result<f64, ConversionError> {
    let reaumur = ensure_above_absolute_zero(reaumur, TemperatureUnit::Reaumur)?;
    Ok(reaumur * 5.0 / 4.0)
}

pub fn fahrenheit_to_kelvin(fahrenheit: f64) -> Result<f64, ConversionError> {
    celsius_to_kelvin(fahrenheit_to_celsius(fahrenheit)?)
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> Result<f64, ConversionError> {
    celsius_to_fahrenheit(kelvin_to_celsius(kelvin)?)
}

fn to_celsius(value: f64, from: TemperatureUnit) -> Result<f64, ConversionError> {
    match from {
        TemperatureUnit::Celsius => Ok(value),
        TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(value),
        TemperatureUnit::Kelvin => kelvin_to_celsius(value),
        TemperatureUnit::Reaumur => reaumur_to_celsius(value),
    }
}

fn from_celsius(celsius: f64, to: TemperatureUnit) -> Result<f64, ConversionError> {
    match to {
        TemperatureUnit::Celsius => Ok(celsius),
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
        TemperatureUnit::Kelvin => celsius_to_kelvin(celsius),
        TemperatureUnit::Reaumur => celsius_to_reaumur(celsius),
    }
}

/// Convert between two typed scales.
///
/// Same-scale conversion is an identity and skips the absolute-zero check.
/// NaN is passed through unchecked.
pub fn convert_between(
    value: f64,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> Result<f64, ConversionError> {
    if from == to {
        return Ok(value);
    }
    let celsius = to_celsius(value, from)?;
    from_celsius(celsius, to)
}

/// Convert a value given single-letter unit codes (`C`, `F`, `K`, `R`).
///
/// Codes are case-insensitive and may carry surrounding whitespace. The
/// source code is validated before the target code. NaN is passed through
/// unchecked.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    let from = TemperatureUnit::parse(from_unit)?;
    let to = TemperatureUnit::parse(to_unit)?;
    convert_between(value, from, to)
}

/// Band of a Celsius value, rejecting values below absolute zero.
///
/// NaN fails every band comparison and lands in [`TemperatureCategory::VeryHot`].
pub fn classify(celsius: f64) -> Result<TemperatureCategory, ConversionError> {
    let celsius = ensure_above_absolute_zero(celsius, TemperatureUnit::Celsius)?;
    Ok(TemperatureCategory::from_celsius(celsius))
}

/// True when `celsius` lies within `tolerance` of `reference`, bounds inclusive
#[must_use]
pub fn is_near(celsius: f64, reference: f64, tolerance: f64) -> bool {
    (celsius - reference).abs() <= tolerance
}

#[must_use]
pub fn is_freezing_point(celsius: f64, tolerance: f64) -> bool {
    is_near(celsius, FREEZING_POINT_C, tolerance)
}

#[must_use]
pub fn is_boiling_point(celsius: f64, tolerance: f64) -> bool {
    is_near(celsius, BOILING_POINT_C, tolerance)
}

/// Render `value` with a fixed precision followed by the unit symbol
#[must_use]
pub fn format_with_unit(value: f64, unit: TemperatureUnit, decimal_places: usize) -> String {
    format!("{:.*}{}", decimal_places, value, unit.symbol())
}

/// Render `value` for a unit code, e.g. `format_temperature(25.5, "c", 2)` gives `25.50°C`
pub fn format_temperature(
    value: f64,
    unit: &str,
    decimal_places: usize,
) -> Result<String, ConversionError> {
    let unit = TemperatureUnit::parse(unit)?;
    Ok(format_with_unit(value, unit, decimal_places))
}
