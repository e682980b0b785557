//! Date-ordered lot inventories
//!
//! Both inventories are sorted `Vec`s searched with `partition_point`, so the
//! eligible range for a distribution date is found in O(log n). New lots are
//! inserted at the upper bound of their key, which keeps lots with equal keys
//! in registration order.
//!
//! Allocation is planned before anything is mutated: a plan lists how much to
//! take from which lot, and it is only applied when it covers the whole
//! request. A request that cannot be covered leaves the inventory untouched.

pub mod cash;
pub mod food;

pub use cash::CashInventory;
pub use food::FoodInventory;

use crate::models::{Amount, CashLot, FoodLot};

/// Anything holding an allocatable amount
pub trait Lot {
    fn amount(&self) -> Amount;
    fn amount_mut(&mut self) -> &mut Amount;
}

impl Lot for CashLot {
    fn amount(&self) -> Amount {
        self.amount
    }

    fn amount_mut(&mut self) -> &mut Amount {
        &mut self.amount
    }
}

impl Lot for FoodLot {
    fn amount(&self) -> Amount {
        self.amount
    }

    fn amount_mut(&mut self) -> &mut Amount {
        &mut self.amount
    }
}

/// A single step of an allocation plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Take {
    /// Index of the lot in its inventory
    pub index: usize,
    /// How much to take from it
    pub amount: Amount,
    /// Whether the lot is used up by this take
    pub exhausts: bool,
}

/// Greedily cover `requested` from candidate lots in the order given.
///
/// A lot no larger than what is still needed is taken whole; otherwise only
/// the remaining need is taken from it and planning stops. On shortfall the
/// error carries the amount that could be covered, i.e. the eligible total.
pub(crate) fn plan<I>(candidates: I, requested: Amount) -> Result<Vec<Take>, Amount>
where
    I: IntoIterator<Item = (usize, Amount)>,
{
    let mut remaining = requested;
    let mut takes = Vec::new();

    for (index, available) in candidates {
        if !remaining.is_positive() {
            break;
        }

        if available <= remaining {
            remaining -= available;
            takes.push(Take {
                index,
                amount: available,
                exhausts: true,
            });
        } else {
            takes.push(Take {
                index,
                amount: remaining,
                exhausts: false,
            });
            remaining = Amount::zero();
        }
    }

    if remaining.is_positive() {
        Err(requested - remaining)
    } else {
        Ok(takes)
    }
}

/// Apply a plan produced by [`plan`] against the same lots.
///
/// Exhausted lots are removed; the others keep their reduced amount and
/// their position, so sort order is preserved.
pub(crate) fn apply<L: Lot>(lots: &mut Vec<L>, takes: &[Take]) {
    for take in takes {
        *lots[take.index].amount_mut() -= take.amount;
    }

    // Takes are in ascending index order
    for take in takes.iter().rev().filter(|t| t.exhausts) {
        lots.remove(take.index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn units(n: i64) -> Amount {
        Amount::from_units(n)
    }

    #[test]
    fn test_plan_takes_whole_lots_then_partial() {
        let takes = plan([(0, units(100)), (1, units(50))], units(120)).unwrap();
        assert_eq!(
            takes,
            vec![
                Take {
                    index: 0,
                    amount: units(100),
                    exhausts: true
                },
                Take {
                    index: 1,
                    amount: units(20),
                    exhausts: false
                },
            ]
        );
    }

    #[test]
    fn test_plan_exact_match_exhausts_lot() {
        let takes = plan([(0, units(30)), (1, units(10))], units(30)).unwrap();
        assert_eq!(takes.len(), 1);
        assert!(takes[0].exhausts);
    }

    #[test]
    fn test_plan_shortfall_reports_eligible_total() {
        let err = plan([(0, units(10)), (3, units(15))], units(40)).unwrap_err();
        assert_eq!(err, units(25));
    }

    #[test]
    fn test_plan_zero_request_is_empty() {
        assert!(plan([(0, units(10))], Amount::zero()).unwrap().is_empty());
        assert!(plan(std::iter::empty(), Amount::zero()).unwrap().is_empty());
    }

    #[test]
    fn test_apply_removes_exhausted_lots() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut lots = vec![
            CashLot::new(d, units(10)),
            CashLot::new(d, units(20)),
            CashLot::new(d, units(30)),
        ];
        let takes = plan([(0, units(10)), (2, units(30))], units(15)).unwrap();
        apply(&mut lots, &takes);

        assert_eq!(lots.len(), 2);
        assert_eq!(lots[0].amount, units(20));
        assert_eq!(lots[1].amount, units(25));
    }
}
