//! Operation scripts
//!
//! Engine state only lives as long as the process, so the CLI drives it from
//! a script: an ordered list of registrations, distributions and report
//! snapshots, written in YAML or JSON.
//!
//! ```yaml
//! steps:
//!   - op: register
//!     donor: Ana
//!     type: money
//!     amount: 100
//!     date: 2024-01-01
//!   - op: register
//!     type: food
//!     amount: "12.5"
//!     date: 2024-01-01
//!     expires: 2024-01-05
//!   - op: distribute
//!     type: food
//!     amount: 5
//!     date: 2024-01-03
//!   - op: report
//!     report: inventory
//! ```

pub mod runner;

pub use runner::{ScriptRunner, StepOutcome};

use std::path::Path;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::{ShelterError, ShelterResult};
use crate::intake::{parse_amount, DistributionRequest, DonationRequest};
use crate::models::{Amount, DonationType};

/// Which report(s) a report step or the final output should include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Inventory,
    Donors,
    #[default]
    All,
}

impl ReportKind {
    pub fn includes_inventory(&self) -> bool {
        matches!(self, Self::Inventory | Self::All)
    }

    pub fn includes_donors(&self) -> bool {
        matches!(self, Self::Donors | Self::All)
    }
}

/// An amount as written in a script: `100`, `12.5` or `"$12.50"`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScriptAmount {
    Text(String),
    Whole(i64),
    Decimal(f64),
}

impl ScriptAmount {
    pub fn to_amount(&self) -> ShelterResult<Amount> {
        match self {
            Self::Text(s) => parse_amount(s),
            Self::Whole(n) => Amount::checked_from_units(*n).ok_or_else(|| {
                ShelterError::Validation(format!("Invalid amount: '{}' is too large", n))
            }),
            Self::Decimal(f) => parse_amount(&f.to_string()),
        }
    }
}

/// One step as written in the script
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Step {
    Register {
        #[serde(default)]
        donor: String,
        #[serde(rename = "type")]
        kind: DonationType,
        amount: ScriptAmount,
        date: NaiveDate,
        /// Food only; omitted means non-perishable
        #[serde(default)]
        expires: Option<NaiveDate>,
    },
    Distribute {
        #[serde(rename = "type")]
        kind: DonationType,
        amount: ScriptAmount,
        date: NaiveDate,
    },
    Report {
        #[serde(default)]
        report: ReportKind,
    },
}

/// A step after validation, ready to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Register(DonationRequest),
    Distribute(DistributionRequest),
    Report(ReportKind),
}

impl Step {
    /// Validate the step's input the way the donation form does
    pub fn validate(&self, settings: &Settings) -> ShelterResult<Action> {
        match self {
            Step::Register {
                donor,
                kind,
                amount,
                date,
                expires,
            } => Ok(Action::Register(DonationRequest::new(
                settings,
                donor,
                *kind,
                amount.to_amount()?,
                *date,
                *expires,
            )?)),
            Step::Distribute { kind, amount, date } => Ok(Action::Distribute(
                DistributionRequest::new(*kind, amount.to_amount()?, *date)?,
            )),
            Step::Report { report } => Ok(Action::Report(*report)),
        }
    }
}

/// Script file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    Yaml,
    Json,
}

impl ScriptFormat {
    /// Pick the format from a file extension; anything but `.json` is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// A parsed operation script
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn parse(text: &str, format: ScriptFormat) -> ShelterResult<Self> {
        let script = match format {
            ScriptFormat::Json => serde_json::from_str(text)
                .map_err(|e| ShelterError::Script(format!("Invalid JSON script: {}", e)))?,
            ScriptFormat::Yaml => serde_yaml::from_str(text)
                .map_err(|e| ShelterError::Script(format!("Invalid YAML script: {}", e)))?,
        };
        Ok(script)
    }

    pub fn load(path: &Path) -> ShelterResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ShelterError::Io(format!("Failed to read script {}: {}", path.display(), e))
        })?;
        Self::parse(&text, ScriptFormat::from_path(path))
    }

    /// Validate every step, reporting the first bad one by its 1-based position
    pub fn validate(&self, settings: &Settings) -> ShelterResult<Vec<Action>> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                step.validate(settings)
                    .map_err(|e| ShelterError::Script(format!("step {}: {}", i + 1, e)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
steps:
  - op: register
    donor: "  "
    type: money
    amount: 100
    date: 2024-01-01
  - op: register
    donor: Pantry
    type: Food
    amount: 12.5
    date: 2024-01-01
    expires: 2024-01-05
  - op: distribute
    type: food
    amount: "$2.25"
    date: 2024-01-02
  - op: report
"#;

    #[test]
    fn test_parse_yaml_script() {
        let script = Script::parse(YAML, ScriptFormat::Yaml).unwrap();
        assert_eq!(script.steps.len(), 4);

        let actions = script.validate(&Settings::default()).unwrap();
        match &actions[0] {
            Action::Register(req) => {
                assert_eq!(req.donor_name, "Anonymous");
                assert_eq!(req.amount, Amount::from_units(100));
            }
            other => panic!("unexpected action: {:?}", other),
        }
        match &actions[1] {
            Action::Register(req) => {
                assert_eq!(req.amount, Amount::from_hundredths(1250));
                assert_eq!(req.expiration_date, NaiveDate::from_ymd_opt(2024, 1, 5));
            }
            other => panic!("unexpected action: {:?}", other),
        }
        match &actions[2] {
            Action::Distribute(req) => assert_eq!(req.amount, Amount::from_hundredths(225)),
            other => panic!("unexpected action: {:?}", other),
        }
        assert_eq!(actions[3], Action::Report(ReportKind::All));
    }

    #[test]
    fn test_parse_json_script() {
        let json = r#"{"steps": [
            {"op": "distribute", "type": "money", "amount": 5, "date": "2024-02-01"},
            {"op": "report", "report": "donors"}
        ]}"#;
        let script = Script::parse(json, ScriptFormat::Json).unwrap();
        let actions = script.validate(&Settings::default()).unwrap();
        assert_eq!(actions[1], Action::Report(ReportKind::Donors));
    }

    #[test]
    fn test_invalid_step_reports_position() {
        let yaml = r#"
steps:
  - op: register
    type: money
    amount: 5
    date: 2024-01-01
  - op: distribute
    type: money
    amount: 0
    date: 2024-01-01
"#;
        let script = Script::parse(yaml, ScriptFormat::Yaml).unwrap();
        let err = script.validate(&Settings::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Script error: step 2: Validation error: Please enter a positive distribution amount."
        );
    }

    #[test]
    fn test_malformed_script_is_script_error() {
        let err = Script::parse("steps: [{op: teleport}]", ScriptFormat::Yaml).unwrap_err();
        assert!(matches!(err, ShelterError::Script(_)));
    }

    #[test]
    fn test_unparseable_amounts_are_validation_errors() {
        let settings = Settings::default();
        for amount in ["100000000000000000", "\"100000000000000000\"", "\"1.aé\"", "\"1.-5\""] {
            let yaml = format!(
                "steps:\n  - op: register\n    type: money\n    amount: {}\n    date: 2024-01-01\n",
                amount
            );
            let script = Script::parse(&yaml, ScriptFormat::Yaml).unwrap();
            let err = script.validate(&settings).unwrap_err();
            assert!(
                err.to_string().starts_with("Script error: step 1: Validation error: Invalid amount"),
                "{}: {}",
                amount,
                err
            );
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ScriptFormat::from_path(Path::new("a.JSON")), ScriptFormat::Json);
        assert_eq!(ScriptFormat::from_path(Path::new("a.yml")), ScriptFormat::Yaml);
        assert_eq!(ScriptFormat::from_path(Path::new("script")), ScriptFormat::Yaml);
    }

    #[test]
    fn test_report_kind_includes() {
        assert!(ReportKind::All.includes_inventory() && ReportKind::All.includes_donors());
        assert!(!ReportKind::Donors.includes_inventory());
        assert!(!ReportKind::Inventory.includes_donors());
    }
}
