//! CSV Export functionality
//!
//! Flattens the inventory and donor reports into one table so a spreadsheet
//! can filter by section.

use std::io::Write;

use crate::error::ShelterResult;
use crate::models::DonationType;
use crate::reports::{DonorReport, InventoryReport};

/// Write both reports as `section,type,key,amount` rows.
///
/// Sections are `balance` (key empty), `forecast` (key is the date, type is
/// always food) and `donor` (key is the donor name). Amounts use two
/// decimals without a unit.
pub fn export_reports_csv<W: Write>(
    inventory: &InventoryReport,
    donors: &DonorReport,
    writer: W,
) -> ShelterResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["section", "type", "key", "amount"])?;

    for (kind, amount) in &inventory.balances {
        out.write_record(["balance", type_label(*kind), "", amount.to_string().as_str()])?;
    }

    for day in &inventory.daily_food_totals {
        out.write_record([
            "forecast",
            type_label(DonationType::Food),
            day.date.to_string().as_str(),
            day.amount.to_string().as_str(),
        ])?;
    }

    for (kind, totals) in &donors.totals {
        for (donor, amount) in totals {
            out.write_record([
                "donor",
                type_label(*kind),
                donor.as_str(),
                amount.to_string().as_str(),
            ])?;
        }
    }

    out.flush()?;
    Ok(())
}

fn type_label(kind: DonationType) -> &'static str {
    match kind {
        DonationType::Money => "money",
        DonationType::Food => "food",
    }
}
