//! Inventory lots
//!
//! A lot is the part of a single donation that has not been distributed yet.
//! Lots shrink in place on partial consumption and are dropped once empty;
//! the donation's ledger record is never touched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// Remaining cash from one money donation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashLot {
    pub donation_date: NaiveDate,
    pub amount: Amount,
}

impl CashLot {
    pub fn new(donation_date: NaiveDate, amount: Amount) -> Self {
        Self {
            donation_date,
            amount,
        }
    }

    /// Cash can be spent from the day it was donated
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        self.donation_date <= date
    }
}

/// Remaining weight from one food donation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodLot {
    pub donation_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub amount: Amount,
}

impl FoodLot {
    pub fn new(donation_date: NaiveDate, expiration_date: NaiveDate, amount: Amount) -> Self {
        Self {
            donation_date,
            expiration_date,
            amount,
        }
    }

    /// Food is distributable from its donation date through its expiration date
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        self.donation_date <= date && date <= self.expiration_date
    }

    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        self.expiration_date < date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_cash_availability() {
        let lot = CashLot::new(day(3), Amount::from_units(5));
        assert!(!lot.is_available_on(day(2)));
        assert!(lot.is_available_on(day(3)));
        assert!(lot.is_available_on(day(30)));
    }

    #[test]
    fn test_food_window_is_inclusive() {
        let lot = FoodLot::new(day(3), day(10), Amount::from_units(5));
        assert!(!lot.is_available_on(day(2)));
        assert!(lot.is_available_on(day(3)));
        assert!(lot.is_available_on(day(10)));
        assert!(!lot.is_available_on(day(11)));
        assert!(lot.is_expired_on(day(11)));
        assert!(!lot.is_expired_on(day(10)));
    }
}
