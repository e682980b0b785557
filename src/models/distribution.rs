//! Distribution model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::donation::DonationType;
use super::ids::DistributionId;

/// Immutable ledger entry for a distribution that was fully allocated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionRecord {
    pub id: DistributionId,
    pub distribution_type: DonationType,
    pub amount: Amount,
    pub date: NaiveDate,
}

impl DistributionRecord {
    pub fn new(distribution_type: DonationType, amount: Amount, date: NaiveDate) -> Self {
        Self {
            id: DistributionId::new(),
            distribution_type,
            amount,
            date,
        }
    }
}
