//! User settings for the shelter CLI
//!
//! Display units, the anonymous donor placeholder, forecast length and
//! whether operations are written to the audit log.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::ShelterPaths;
use crate::error::ShelterError;
use crate::models::{Amount, DonationType};
use crate::reports::DEFAULT_FORECAST_DAYS;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol for money amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Unit label for food amounts
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,

    /// Donor name recorded when none is given
    #[serde(default = "default_anonymous_donor")]
    pub anonymous_donor: String,

    /// Days covered by the food availability forecast
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether registrations and distributions are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_weight_unit() -> String {
    "lbs".to_string()
}

fn default_anonymous_donor() -> String {
    "Anonymous".to_string()
}

fn default_forecast_days() -> u32 {
    DEFAULT_FORECAST_DAYS
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            weight_unit: default_weight_unit(),
            anonymous_donor: default_anonymous_donor(),
            forecast_days: default_forecast_days(),
            date_format: default_date_format(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Format an amount in the configured unit for its type
    pub fn format_amount(&self, kind: DonationType, amount: Amount) -> String {
        kind.format_amount(amount, &self.currency_symbol, &self.weight_unit)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ShelterPaths) -> Result<Self, ShelterError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ShelterError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ShelterError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject settings that would fail later while rendering output
    pub fn validate(&self) -> Result<(), ShelterError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ShelterError::Config(format!(
                "Invalid date_format '{}': not a valid strftime format",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ShelterPaths) -> Result<(), ShelterError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ShelterError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ShelterError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
