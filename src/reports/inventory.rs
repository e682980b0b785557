//! Inventory Report
//!
//! Net balance per donation type from the ledgers, and a forward projection
//! of food weight whose availability window covers each upcoming day.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::inventory::FoodInventory;
use crate::models::{Amount, DonationType};
use crate::services::AllocationEngine;

/// Food weight available on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyFoodTotal {
    pub date: NaiveDate,
    pub amount: Amount,
}

/// Inventory Report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryReport {
    /// Donated minus distributed, per type that appears in either ledger
    pub balances: BTreeMap<DonationType, Amount>,
    /// Empty when no food lots are held
    pub daily_food_totals: Vec<DailyFoodTotal>,
}

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

#[derive(Tabled)]
struct ForecastRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Food available")]
    amount: String,
}

impl InventoryReport {
    /// Generate the report from the engine's current state
    pub fn generate(engine: &AllocationEngine, forecast_days: u32) -> Self {
        let mut balances: BTreeMap<DonationType, Amount> = BTreeMap::new();

        for donation in engine.donations().records() {
            *balances.entry(donation.donation_type).or_default() += donation.amount;
        }
        for distribution in engine.distributions().records() {
            *balances.entry(distribution.distribution_type).or_default() -= distribution.amount;
        }

        Self {
            balances,
            daily_food_totals: food_forecast(engine.food_inventory(), forecast_days),
        }
    }

    /// Balance for one type (zero if the type never appeared)
    pub fn balance(&self, kind: DonationType) -> Amount {
        self.balances.get(&kind).copied().unwrap_or_default()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str("Inventory Report\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        if self.balances.is_empty() {
            output.push_str("No donations recorded.\n");
        } else {
            let rows = self.balances.iter().map(|(kind, amount)| BalanceRow {
                kind: kind.to_string(),
                balance: settings.format_amount(*kind, *amount),
            });
            let mut table = Table::new(rows);
            table.with(Style::sharp());
            output.push_str(&table.to_string());
            output.push('\n');
        }

        if !self.daily_food_totals.is_empty() {
            output.push_str(&format!(
                "\nFood availability ({} days)\n",
                self.daily_food_totals.len()
            ));
            let rows = self.daily_food_totals.iter().map(|d| ForecastRow {
                date: d.date.format(&settings.date_format).to_string(),
                amount: settings.format_amount(DonationType::Food, d.amount),
            });
            let mut table = Table::new(rows);
            table.with(Style::sharp());
            output.push_str(&table.to_string());
            output.push('\n');
        }

        output
    }
}

/// Sum held food per day for `days` days from the earliest donation date
/// among lots still in inventory, expired lots included.
fn food_forecast(food: &FoodInventory, days: u32) -> Vec<DailyFoodTotal> {
    let Some(start) = food.earliest_donation_date() else {
        return Vec::new();
    };

    (0..u64::from(days))
        .map_while(|offset| start.checked_add_days(Days::new(offset)))
        .map(|date| DailyFoodTotal {
            date,
            amount: food.available_on(date),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn units(n: i64) -> Amount {
        Amount::from_units(n)
    }

    #[test]
    fn test_balances_reconcile_ledgers() {
        let mut engine = AllocationEngine::new();
        engine.register("A", DonationType::Money, units(100), day(1), None);
        engine.register("B", DonationType::Money, units(50), day(2), None);
        engine.register("C", DonationType::Food, units(10), day(1), Some(day(5)));
        engine.distribute(DonationType::Money, units(120), day(2)).unwrap();
        engine.distribute(DonationType::Food, units(99), day(2)).unwrap_err();

        let report = InventoryReport::generate(&engine, 10);
        assert_eq!(report.balance(DonationType::Money), units(30));
        assert_eq!(report.balance(DonationType::Food), units(10));
    }

    #[test]
    fn test_empty_engine_has_no_forecast() {
        let engine = AllocationEngine::new();
        let report = InventoryReport::generate(&engine, 10);
        assert!(report.balances.is_empty());
        assert!(report.daily_food_totals.is_empty());
        assert_eq!(report.balance(DonationType::Food), Amount::zero());
    }

    #[test]
    fn test_forecast_windows() {
        let mut engine = AllocationEngine::new();
        engine.register("A", DonationType::Food, units(10), day(3), Some(day(5)));
        engine.register("B", DonationType::Food, units(4), day(4), Some(day(20)));

        let report = InventoryReport::generate(&engine, 10);
        let totals = &report.daily_food_totals;

        assert_eq!(totals.len(), 10);
        assert_eq!(totals[0], DailyFoodTotal { date: day(3), amount: units(10) });
        assert_eq!(totals[1].amount, units(14));
        assert_eq!(totals[2].amount, units(14));
        assert_eq!(totals[3], DailyFoodTotal { date: day(6), amount: units(4) });
        assert_eq!(totals[9].date, day(12));
    }

    #[test]
    fn test_forecast_uses_remaining_lot_amounts() {
        let mut engine = AllocationEngine::new();
        engine.register("A", DonationType::Food, units(10), day(1), Some(day(10)));
        engine.distribute(DonationType::Food, units(6), day(2)).unwrap();

        let report = InventoryReport::generate(&engine, 3);
        assert_eq!(report.daily_food_totals.len(), 3);
        assert!(report.daily_food_totals.iter().all(|d| d.amount == units(4)));
    }

    #[test]
    fn test_forecast_stops_at_calendar_end() {
        let mut engine = AllocationEngine::new();
        engine.register("A", DonationType::Food, units(1), NaiveDate::MAX, None);

        let report = InventoryReport::generate(&engine, 10);
        assert_eq!(report.daily_food_totals.len(), 1);
    }

    #[test]
    fn test_format_terminal() {
        let mut engine = AllocationEngine::new();
        engine.register("A", DonationType::Money, Amount::from_hundredths(1050), day(1), None);
        engine.register("B", DonationType::Food, units(3), day(1), Some(day(2)));

        let text = InventoryReport::generate(&engine, 2).format_terminal(&Settings::default());
        assert!(text.contains("Inventory Report"));
        assert!(text.contains("$10.50"));
        assert!(text.contains("3.00 lbs"));
        assert!(text.contains("2024-01-02"));
    }
}
