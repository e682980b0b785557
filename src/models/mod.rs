//! Core data models for the shelter donation system
//!
//! This module contains the value types shared by the inventories, ledgers,
//! engine and reports: amounts, donation kinds, lots, and ledger records.

pub mod amount;
pub mod distribution;
pub mod donation;
pub mod ids;
pub mod lot;

pub use amount::{Amount, AmountParseError};
pub use distribution::DistributionRecord;
pub use donation::{format_expiration, DonationRecord, DonationType};
pub use ids::{DistributionId, DonationId};
pub use lot::{CashLot, FoodLot};
