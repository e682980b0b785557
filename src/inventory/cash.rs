//! Cash inventory ordered by donation date (oldest money first)

use chrono::NaiveDate;

use super::{apply, plan};
use crate::models::{Amount, CashLot};

/// Cash lots sorted by donation date; ties keep registration order
#[derive(Debug, Clone, Default)]
pub struct CashInventory {
    lots: Vec<CashLot>,
}

impl CashInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a lot at the upper bound of its donation date
    pub fn insert(&mut self, lot: CashLot) {
        let index = self
            .lots
            .partition_point(|l| l.donation_date <= lot.donation_date);
        self.lots.insert(index, lot);
        debug_assert!(self.is_sorted());
    }

    pub fn lots(&self) -> &[CashLot] {
        &self.lots
    }

    pub fn len(&self) -> usize {
        self.lots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    /// Total remaining cash regardless of date
    pub fn total(&self) -> Amount {
        self.lots.iter().map(|l| l.amount).sum()
    }

    /// Lots donated on or before `date` (a prefix of the inventory)
    pub fn eligible(&self, date: NaiveDate) -> &[CashLot] {
        let end = self.lots.partition_point(|l| l.donation_date <= date);
        &self.lots[..end]
    }

    /// Cash that could be spent on `date`
    pub fn eligible_total(&self, date: NaiveDate) -> Amount {
        self.eligible(date).iter().map(|l| l.amount).sum()
    }

    /// Take `amount` from lots donated on or before `date`, oldest first.
    ///
    /// Either the whole amount is taken, or nothing changes and the eligible
    /// total is returned as the error.
    pub fn allocate(&mut self, amount: Amount, date: NaiveDate) -> Result<(), Amount> {
        let candidates = self
            .eligible(date)
            .iter()
            .enumerate()
            .map(|(i, lot)| (i, lot.amount));
        let takes = plan(candidates, amount)?;
        apply(&mut self.lots, &takes);
        Ok(())
    }

    /// Check the ordering invariant
    pub fn is_sorted(&self) -> bool {
        self.lots
            .windows(2)
            .all(|w| w[0].donation_date <= w[1].donation_date)
    }
}
