//! Append-only ledgers of donations and distributions
//!
//! Ledgers only grow. Records are never edited or removed, so reports built
//! from them reconcile cumulative totals rather than live lot state.

use crate::models::{Amount, DistributionRecord, DonationRecord, DonationType};

/// Every donation ever registered, in registration order
#[derive(Debug, Clone, Default)]
pub struct DonationLedger {
    records: Vec<DonationRecord>,
}

impl DonationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: DonationRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[DonationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Cumulative amount donated of one type
    pub fn total(&self, donation_type: DonationType) -> Amount {
        self.records
            .iter()
            .filter(|r| r.donation_type == donation_type)
            .map(|r| r.amount)
            .sum()
    }
}

/// Every distribution that was fully allocated, in the order applied
#[derive(Debug, Clone, Default)]
pub struct DistributionLedger {
    records: Vec<DistributionRecord>,
}

impl DistributionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: DistributionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[DistributionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Cumulative amount distributed of one type
    pub fn total(&self, distribution_type: DonationType) -> Amount {
        self.records
            .iter()
            .filter(|r| r.distribution_type == distribution_type)
            .map(|r| r.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_totals_by_type() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut donations = DonationLedger::new();
        donations.append(DonationRecord::new("A", DonationType::Money, Amount::from_units(5), d, None));
        donations.append(DonationRecord::new("B", DonationType::Money, Amount::from_units(7), d, None));
        donations.append(DonationRecord::new("C", DonationType::Food, Amount::from_units(3), d, Some(d)));

        assert_eq!(donations.len(), 3);
        assert_eq!(donations.total(DonationType::Money), Amount::from_units(12));
        assert_eq!(donations.total(DonationType::Food), Amount::from_units(3));

        let mut distributions = DistributionLedger::new();
        assert!(distributions.is_empty());
        distributions.append(DistributionRecord::new(DonationType::Food, Amount::from_units(2), d));
        assert_eq!(distributions.total(DonationType::Food), Amount::from_units(2));
        assert_eq!(distributions.total(DonationType::Money), Amount::zero());
    }
}
