//! Session-gated facade over the conversion engine
//!
//! Outer layers (CLI, HTTP, UI) go through [`ConversionService`]. It holds
//! the caller's [`Session`] and the configured defaults, and turns engine
//! results into serializable reports. The engine itself stays free of
//! session and configuration types.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::auth::Session;
use crate::config::ConversionConfig;
use crate::conversion;
use crate::error::ConversionError;
use crate::models::{Temperature, TemperatureCategory, TemperatureUnit};

/// Outcome of a single conversion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    pub source: Temperature,
    pub result: Temperature,
    /// e.g. `25.00°C`
    pub source_display: String,
    pub result_display: String,
    /// Only filled when the target scale is Celsius
    pub category: Option<TemperatureCategory>,
    pub reference_points: Option<ReferencePoints>,
}

impl ConversionReport {
    /// One-line summary such as `0.00°C = 32.00°F`
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} = {}", self.source_display, self.result_display)
    }
}

/// Proximity of a Celsius value to water's phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoints {
    pub celsius: f64,
    pub tolerance: f64,
    pub freezing: bool,
    pub boiling: bool,
}

pub struct ConversionService<'a> {
    session: &'a Session,
    settings: ConversionConfig,
}

impl<'a> ConversionService<'a> {
    #[must_use]
    pub fn new(session: &'a Session, settings: ConversionConfig) -> Self {
        Self { session, settings }
    }

    #[must_use]
    pub fn settings(&self) -> &ConversionConfig {
        &self.settings
    }

    /// Convert between unit codes and describe the result.
    ///
    /// A Celsius target also gets its category, and reference point flags
    /// whenever the Celsius value is physically valid.
    #[instrument(skip(self), fields(user = %self.session.username))]
    pub fn convert(
        &self,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<ConversionReport, ConversionError> {
        let from = TemperatureUnit::parse(from_unit)?;
        let to = TemperatureUnit::parse(to_unit)?;

        let source = Temperature::new(value, from);
        let result = source.convert_to(to)?;

        let category = if to == TemperatureUnit::Celsius {
            Some(conversion::classify(result.value)?)
        } else {
            None
        };

        let reference_points = source
            .to_celsius()
            .ok()
            .filter(|c| *c >= TemperatureUnit::Celsius.absolute_zero())
            .map(|c| self.reference_points(c));

        let decimals = self.settings.decimal_places;
        let report = ConversionReport {
            source_display: source.format(decimals),
            result_display: result.format(decimals),
            source,
            result,
            category,
            reference_points,
        };
        tracing::debug!(summary = %report.summary(), "Converted");
        Ok(report)
    }

    #[instrument(skip(self), fields(user = %self.session.username))]
    pub fn classify(&self, celsius: f64) -> Result<TemperatureCategory, ConversionError> {
        conversion::classify(celsius)
    }

    /// Freezing and boiling point flags using the configured tolerance
    #[must_use]
    pub fn reference_points(&self, celsius: f64) -> ReferencePoints {
        self.reference_points_with(celsius, self.settings.tolerance)
    }

    #[must_use]
    pub fn reference_points_with(&self, celsius: f64, tolerance: f64) -> ReferencePoints {
        ReferencePoints {
            celsius,
            tolerance,
            freezing: conversion::is_freezing_point(celsius, tolerance),
            boiling: conversion::is_boiling_point(celsius, tolerance),
        }
    }

    /// Format with the configured precision
    pub fn format(&self, value: f64, unit: &str) -> Result<String, ConversionError> {
        conversion::format_temperature(value, unit, self.settings.decimal_places)
    }
}
