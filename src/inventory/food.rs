//! Food inventory ordered by expiration date (first-expire, first-out)
//!
//! A food lot is eligible on a date when it has already been donated and has
//! not yet expired. The expiry bound is found by binary search; the donation
//! bound is checked per lot while scanning, and lots donated later than the
//! distribution date are skipped without moving.

use chrono::NaiveDate;

use super::{apply, plan};
use crate::models::{Amount, FoodLot};

/// Food lots sorted by expiration date; ties keep registration order
#[derive(Debug, Clone, Default)]
pub struct FoodInventory {
    lots: Vec<FoodLot>,
}

impl FoodInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a lot at the upper bound of its expiration date
    pub fn insert(&mut self, lot: FoodLot) {
        let index = self
            .lots
            .partition_point(|l| l.expiration_date <= lot.expiration_date);
        self.lots.insert(index, lot);
        debug_assert!(self.is_sorted());
    }

    pub fn lots(&self) -> &[FoodLot] {
        &self.lots
    }

    pub fn len(&self) -> usize {
        self.lots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    /// Total remaining weight, expired lots included
    pub fn total(&self) -> Amount {
        self.lots.iter().map(|l| l.amount).sum()
    }

    /// Index of the first lot that is not expired on `date`
    pub fn first_unexpired(&self, date: NaiveDate) -> usize {
        self.lots.partition_point(|l| l.is_expired_on(date))
    }

    /// Lots that have expired by `date`; these are kept but never distributed
    pub fn expired(&self, date: NaiveDate) -> &[FoodLot] {
        &self.lots[..self.first_unexpired(date)]
    }

    /// Eligible lots on `date` with their inventory indices, in FEFO order
    fn candidates(&self, date: NaiveDate) -> impl Iterator<Item = (usize, &FoodLot)> {
        let start = self.first_unexpired(date);
        self.lots[start..]
            .iter()
            .enumerate()
            .map(move |(offset, lot)| (start + offset, lot))
            .filter(move |(_, lot)| lot.donation_date <= date)
    }

    /// Weight that could be distributed on `date`
    pub fn eligible_total(&self, date: NaiveDate) -> Amount {
        self.candidates(date).map(|(_, l)| l.amount).sum()
    }

    /// Take `amount` from lots eligible on `date`, soonest expiry first.
    ///
    /// Either the whole amount is taken, or nothing changes and the eligible
    /// total is returned as the error.
    pub fn allocate(&mut self, amount: Amount, date: NaiveDate) -> Result<(), Amount> {
        let candidates = self.candidates(date).map(|(i, lot)| (i, lot.amount));
        let takes = plan(candidates, amount)?;
        apply(&mut self.lots, &takes);
        Ok(())
    }

    /// Earliest donation date among lots still held
    pub fn earliest_donation_date(&self) -> Option<NaiveDate> {
        self.lots.iter().map(|l| l.donation_date).min()
    }

    /// Weight whose availability window contains `date`
    pub fn available_on(&self, date: NaiveDate) -> Amount {
        self.lots
            .iter()
            .filter(|l| l.is_available_on(date))
            .map(|l| l.amount)
            .sum()
    }

    /// Check the ordering invariant
    pub fn is_sorted(&self) -> bool {
        self.lots
            .windows(2)
            .all(|w| w[0].expiration_date <= w[1].expiration_date)
    }
}
