//! Script execution
//!
//! Runs validated actions against one engine in order. A shortfall is an
//! outcome, not a failure: it is reported and audited, and the run goes on
//! with the inventories untouched.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::{Action, ReportKind, Script};
use crate::audit::{AuditEntry, AuditLogger};
use crate::config::Settings;
use crate::error::ShelterResult;
use crate::intake::DistributionRequest;
use crate::models::{format_expiration, Amount, DistributionRecord, DonationRecord};
use crate::reports::{DonorReport, InventoryReport, ReportGenerator};
use crate::services::AllocationEngine;

/// Result of one executed step
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum StepOutcome {
    Registered(DonationRecord),
    Distributed(DistributionRecord),
    Rejected {
        request: DistributionRequest,
        message: String,
        available: Amount,
    },
    Report {
        #[serde(skip_serializing_if = "Option::is_none")]
        inventory: Option<InventoryReport>,
        #[serde(skip_serializing_if = "Option::is_none")]
        donors: Option<DonorReport>,
    },
}

impl StepOutcome {
    /// One-line description for terminal output; reports render as tables
    pub fn describe(&self, settings: &Settings) -> String {
        match self {
            Self::Registered(record) => {
                let mut line = format!(
                    "Registered {} donation of {} from {} on {}",
                    record.donation_type,
                    settings.format_amount(record.donation_type, record.amount),
                    record.donor_name,
                    record.date.format(&settings.date_format)
                );
                if let Some(expires) = record.expiration_date {
                    let shown = if record.is_non_perishable() {
                        format_expiration(Some(expires))
                    } else {
                        expires.format(&settings.date_format).to_string()
                    };
                    line.push_str(&format!(", expires {}", shown));
                }
                line
            }
            Self::Distributed(record) => format!(
                "Distributed {} of {} on {}",
                settings.format_amount(record.distribution_type, record.amount),
                record.distribution_type,
                record.date.format(&settings.date_format)
            ),
            Self::Rejected { message, .. } => format!("Rejected: {}", message),
            Self::Report { inventory, donors } => {
                let mut output = String::new();
                if let Some(report) = inventory {
                    output.push_str(&report.format_terminal(settings));
                }
                if let Some(report) = donors {
                    if !output.is_empty() {
                        output.push('\n');
                    }
                    output.push_str(&report.format_terminal(settings));
                }
                output
            }
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Drives one in-memory engine through scripts
pub struct ScriptRunner<'a> {
    engine: AllocationEngine,
    settings: &'a Settings,
    audit: Option<AuditLogger>,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            engine: AllocationEngine::new(),
            settings,
            audit: None,
        }
    }

    /// Append every registration, distribution and rejection to this log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn engine(&self) -> &AllocationEngine {
        &self.engine
    }

    /// Validate the whole script, then execute it step by step.
    ///
    /// Nothing executes if any step is invalid. A failed audit write is
    /// logged and does not stop the run, since the engine has already
    /// changed by then.
    pub fn run(&mut self, script: &Script) -> ShelterResult<Vec<StepOutcome>> {
        let actions = script.validate(self.settings)?;
        info!(steps = actions.len(), "running script");

        actions
            .into_iter()
            .map(|action| self.execute(action))
            .collect()
    }

    /// Execute one validated action
    pub fn execute(&mut self, action: Action) -> ShelterResult<StepOutcome> {
        match action {
            Action::Register(request) => {
                let record = self.engine.register(
                    request.donor_name,
                    request.donation_type,
                    request.amount,
                    request.date,
                    request.expiration_date,
                );
                self.audit(&AuditEntry::registered(&record));
                Ok(StepOutcome::Registered(record))
            }
            Action::Distribute(request) => {
                match self
                    .engine
                    .distribute(request.distribution_type, request.amount, request.date)
                {
                    Ok(record) => {
                        self.audit(&AuditEntry::distributed(&record));
                        Ok(StepOutcome::Distributed(record))
                    }
                    Err(err) if err.is_shortfall() => {
                        let message = err.to_string();
                        let available = err.available().unwrap_or_default();
                        warn!(kind = %request.distribution_type, %available, "{}", message);
                        self.audit(&AuditEntry::rejected(message.clone(), &request));
                        Ok(StepOutcome::Rejected {
                            request,
                            message,
                            available,
                        })
                    }
                    Err(err) => Err(err),
                }
            }
            Action::Report(kind) => Ok(self.snapshot(kind)),
        }
    }

    /// Build the requested reports from the current engine state
    pub fn snapshot(&self, kind: ReportKind) -> StepOutcome {
        let generator =
            ReportGenerator::new(&self.engine).with_forecast_days(self.settings.forecast_days);

        StepOutcome::Report {
            inventory: kind
                .includes_inventory()
                .then(|| generator.inventory_report()),
            donors: kind.includes_donors().then(|| generator.donor_report()),
        }
    }

    fn audit(&self, entry: &AuditEntry) {
        let Some(logger) = &self.audit else {
            return;
        };
        match logger.log(entry) {
            Ok(()) => debug!(operation = %entry.operation, "audit entry written"),
            Err(err) => warn!(
                operation = %entry.operation,
                path = %logger.path().display(),
                "audit entry not written: {}",
                err
            ),
        }
    }
}
