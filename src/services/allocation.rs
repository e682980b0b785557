//! Allocation engine
//!
//! Owns the cash and food inventories and the two ledgers. Registration
//! inserts a lot and records the donation; distribution consumes eligible
//! lots and records the distribution only when the full amount was covered.
//!
//! The engine does not validate its inputs: positive amounts, blank donor
//! names and date sanity are the caller's concern (see [`crate::intake`]).

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{ShelterError, ShelterResult};
use crate::inventory::{CashInventory, FoodInventory};
use crate::ledger::{DistributionLedger, DonationLedger};
use crate::models::{Amount, CashLot, DistributionRecord, DonationRecord, DonationType, FoodLot};

/// In-memory state of one shelter and the operations that change it.
///
/// Mutators take `&mut self`; a host sharing the engine across threads must
/// put the whole engine behind a single lock, since a distribution reads and
/// then rewrites the inventories.
#[derive(Debug, Clone, Default)]
pub struct AllocationEngine {
    cash: CashInventory,
    food: FoodInventory,
    donations: DonationLedger,
    distributions: DistributionLedger,
}

impl AllocationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a donation.
    ///
    /// `expiration_date` only applies to food; food without one never
    /// expires. Money ignores it and its ledger record carries none.
    pub fn register(
        &mut self,
        donor_name: impl Into<String>,
        donation_type: DonationType,
        amount: Amount,
        date: NaiveDate,
        expiration_date: Option<NaiveDate>,
    ) -> DonationRecord {
        let expiration_date = match donation_type {
            DonationType::Money => {
                self.cash.insert(CashLot::new(date, amount));
                None
            }
            DonationType::Food => {
                let expires = expiration_date.unwrap_or(NaiveDate::MAX);
                self.food.insert(FoodLot::new(date, expires, amount));
                Some(expires)
            }
        };

        let record = DonationRecord::new(donor_name, donation_type, amount, date, expiration_date);
        debug!(
            id = %record.id,
            donor = %record.donor_name,
            kind = %donation_type,
            %amount,
            %date,
            "donation registered"
        );
        self.donations.append(record.clone());
        record
    }

    /// Distribute `amount` of a type on `date`.
    ///
    /// Money is drawn oldest donation first from cash donated on or before
    /// `date`. Food is drawn soonest expiry first from food donated on or
    /// before `date` and expiring on or after it. A shortfall leaves every
    /// inventory untouched and reports what was available.
    pub fn distribute(
        &mut self,
        distribution_type: DonationType,
        amount: Amount,
        date: NaiveDate,
    ) -> ShelterResult<DistributionRecord> {
        let allocated = match distribution_type {
            DonationType::Money => self
                .cash
                .allocate(amount, date)
                .map_err(|available| ShelterError::InsufficientMoney { available }),
            DonationType::Food => {
                self.food
                    .allocate(amount, date)
                    .map_err(|available| ShelterError::InsufficientFood {
                        available,
                        as_of: date,
                    })
            }
        };

        if let Err(err) = allocated {
            info!(kind = %distribution_type, %amount, %date, "distribution rejected: {}", err);
            return Err(err);
        }

        let record = DistributionRecord::new(distribution_type, amount, date);
        debug!(id = %record.id, kind = %distribution_type, %amount, %date, "distribution applied");
        self.distributions.append(record.clone());
        Ok(record)
    }

    /// Amount of a type that a distribution on `date` could draw on
    pub fn available_on(&self, distribution_type: DonationType, date: NaiveDate) -> Amount {
        match distribution_type {
            DonationType::Money => self.cash.eligible_total(date),
            DonationType::Food => self.food.eligible_total(date),
        }
    }

    pub fn cash_inventory(&self) -> &CashInventory {
        &self.cash
    }

    pub fn food_inventory(&self) -> &FoodInventory {
        &self.food
    }

    pub fn donations(&self) -> &DonationLedger {
        &self.donations
    }

    pub fn distributions(&self) -> &DistributionLedger {
        &self.distributions
    }
}
