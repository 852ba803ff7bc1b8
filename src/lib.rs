//! `ThermoGate` - Validated temperature conversion behind a session gate
//!
//! This library provides the conversion engine (four temperature scales,
//! classification, reference point checks, formatting), the credential gate
//! types that guard it, and the configuration and logging used by the CLI.

pub mod auth;
pub mod config;
pub mod conversion;
pub mod error;
pub mod logging;
pub mod models;
pub mod service;

// Re-export core types for public API
pub use auth::{AuthError, CredentialStore, Registration, Role, Session, UserSummary};
pub use config::ThermoGateConfig;
pub use conversion::{
    classify, convert, convert_between, format_temperature, is_boiling_point, is_freezing_point,
    is_near,
};
pub use error::{ConversionError, ThermoGateError};
pub use models::{Temperature, TemperatureCategory, TemperatureUnit};
pub use service::{ConversionReport, ConversionService, ReferencePoints};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
