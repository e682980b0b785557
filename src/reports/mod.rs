//! Reports module
//!
//! Provides the inventory report (ledger balances plus a short food
//! availability forecast) and the donor report (cumulative giving per donor).
//! Reports are snapshots: they borrow the engine only while being built.

pub mod donor;
pub mod inventory;

pub use donor::DonorReport;
pub use inventory::{DailyFoodTotal, InventoryReport};

use crate::services::AllocationEngine;

/// Number of days covered by the food availability forecast
pub const DEFAULT_FORECAST_DAYS: u32 = 10;

/// Builds reports from an engine's ledgers and food inventory
pub struct ReportGenerator<'a> {
    engine: &'a AllocationEngine,
    forecast_days: u32,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(engine: &'a AllocationEngine) -> Self {
        Self {
            engine,
            forecast_days: DEFAULT_FORECAST_DAYS,
        }
    }

    /// Override the forecast length (from `Settings::forecast_days`)
    pub fn with_forecast_days(mut self, days: u32) -> Self {
        self.forecast_days = days;
        self
    }

    pub fn inventory_report(&self) -> InventoryReport {
        InventoryReport::generate(self.engine, self.forecast_days)
    }

    pub fn donor_report(&self) -> DonorReport {
        DonorReport::generate(self.engine.donations())
    }
}
