//! Custom error types for the shelter donation system
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The two shortfall variants are the only
//! failures the allocation engine itself produces; everything else comes from
//! the collaborator layers (configuration, scripts, audit, export).

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Amount;

/// The main error type for shelter operations
#[derive(Error, Debug)]
pub enum ShelterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Input rejected before it reached the engine
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation script could not be read or interpreted
    #[error("Script error: {0}")]
    Script(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Not enough eligible cash to cover a distribution
    #[error(
        "Not enough money in system to complete distribution. \
         Expected available money at this date: ${available}"
    )]
    InsufficientMoney { available: Amount },

    /// Not enough eligible (donated, unexpired) food to cover a distribution
    #[error(
        "Not enough food expected in system to complete distribution at this date. \
         Expected food weight on {as_of} is {available} lbs"
    )]
    InsufficientFood { available: Amount, as_of: NaiveDate },
}

impl ShelterError {
    /// Check if this is a distribution shortfall
    pub fn is_shortfall(&self) -> bool {
        matches!(
            self,
            Self::InsufficientMoney { .. } | Self::InsufficientFood { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The amount that was available when a distribution fell short
    pub fn available(&self) -> Option<Amount> {
        match self {
            Self::InsufficientMoney { available } | Self::InsufficientFood { available, .. } => {
                Some(*available)
            }
            _ => None,
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ShelterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ShelterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for ShelterError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for ShelterError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for shelter operations
pub type ShelterResult<T> = Result<T, ShelterError>;
