//! Data models for the ThermoGate library
//!
//! This module contains the core value types organized by concern:
//! - Unit: Temperature scales and their parsing rules
//! - Temperature: A value paired with its scale
//! - Category: Descriptive bands for Celsius values

pub mod category;
pub mod temperature;
pub mod unit;

// Re-export all public types for convenient access
pub use category::TemperatureCategory;
pub use temperature::Temperature;
pub use unit::TemperatureUnit;
