//! JSON Export functionality
//!
//! Amounts are serialized as integer hundredths.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{ShelterError, ShelterResult};
use crate::reports::{DonorReport, InventoryReport, ReportGenerator};
use crate::script::StepOutcome;
use crate::services::AllocationEngine;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything a script run produced
#[derive(Debug, Clone, Serialize)]
pub struct RunExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Outcome of every step, in script order
    pub outcomes: Vec<StepOutcome>,

    /// Inventory report after the last step
    pub inventory: InventoryReport,

    /// Donor report after the last step
    pub donors: DonorReport,

    pub metadata: ExportMetadata,
}

/// Counts for quick reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportMetadata {
    pub donation_count: usize,
    pub distribution_count: usize,
    pub rejected_count: usize,
}

impl RunExport {
    pub fn new(engine: &AllocationEngine, outcomes: Vec<StepOutcome>, forecast_days: u32) -> Self {
        let generator = ReportGenerator::new(engine).with_forecast_days(forecast_days);

        let metadata = ExportMetadata {
            donation_count: engine.donations().len(),
            distribution_count: engine.distributions().len(),
            rejected_count: outcomes.iter().filter(|o| o.is_rejection()).count(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            outcomes,
            inventory: generator.inventory_report(),
            donors: generator.donor_report(),
            metadata,
        }
    }
}

/// Write the export as pretty-printed JSON
pub fn export_run_json<W: Write>(export: &RunExport, writer: &mut W) -> ShelterResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| ShelterError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ShelterError::Export(e.to_string()))?;
    Ok(())
}
