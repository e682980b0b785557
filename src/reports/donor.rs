//! Donor Report
//!
//! Cumulative amount given by each donor, grouped by donation type. Built
//! from the donation ledger only; distributions are not netted out.

use serde::Serialize;
use std::collections::BTreeMap;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::ledger::DonationLedger;
use crate::models::{Amount, DonationType};

/// Donor Report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DonorReport {
    pub totals: BTreeMap<DonationType, BTreeMap<String, Amount>>,
}

#[derive(Tabled)]
struct DonorRow {
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Donor")]
    donor: String,
    #[tabled(rename = "Total")]
    total: String,
}

impl DonorReport {
    pub fn generate(donations: &DonationLedger) -> Self {
        let mut totals: BTreeMap<DonationType, BTreeMap<String, Amount>> = BTreeMap::new();

        for donation in donations.records() {
            *totals
                .entry(donation.donation_type)
                .or_default()
                .entry(donation.donor_name.clone())
                .or_default() += donation.amount;
        }

        Self { totals }
    }

    /// Total given by an exact donor name for one type
    pub fn donor_total(&self, kind: DonationType, donor: &str) -> Amount {
        self.totals
            .get(&kind)
            .and_then(|donors| donors.get(donor))
            .copied()
            .unwrap_or_default()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str("Donor Report\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        if self.totals.is_empty() {
            output.push_str("No donations recorded.\n");
            return output;
        }

        let rows = self.totals.iter().flat_map(|(kind, donors)| {
            donors.iter().map(move |(donor, total)| DonorRow {
                kind: kind.to_string(),
                donor: donor.clone(),
                total: settings.format_amount(*kind, *total),
            })
        });
        let mut table = Table::new(rows);
        table.with(Style::sharp());
        output.push_str(&table.to_string());
        output.push('\n');

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DonationRecord;
    use chrono::NaiveDate;

    fn ledger() -> DonationLedger {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut ledger = DonationLedger::new();
        for (donor, kind, units) in [
            ("Alice", DonationType::Money, 100),
            ("Bob", DonationType::Money, 20),
            ("Alice", DonationType::Money, 5),
            ("Alice", DonationType::Food, 12),
            ("alice", DonationType::Money, 1),
        ] {
            ledger.append(DonationRecord::new(donor, kind, Amount::from_units(units), d, Some(d)));
        }
        ledger
    }

    #[test]
    fn test_totals_per_exact_donor_and_type() {
        let report = DonorReport::generate(&ledger());

        assert_eq!(report.donor_total(DonationType::Money, "Alice"), Amount::from_units(105));
        assert_eq!(report.donor_total(DonationType::Money, "alice"), Amount::from_units(1));
        assert_eq!(report.donor_total(DonationType::Food, "Alice"), Amount::from_units(12));
        assert_eq!(report.donor_total(DonationType::Food, "Bob"), Amount::zero());
        assert_eq!(report.totals[&DonationType::Money].len(), 3);
    }

    #[test]
    fn test_format_terminal() {
        let text = DonorReport::generate(&ledger()).format_terminal(&Settings::default());
        assert!(text.contains("Alice"));
        assert!(text.contains("$105.00"));
        assert!(text.contains("12.00 lbs"));

        let empty = DonorReport::default().format_terminal(&Settings::default());
        assert!(empty.contains("No donations recorded."));
    }
}
