//! YAML Export functionality

use std::io::Write;

use crate::error::{ShelterError, ShelterResult};
use crate::export::json::RunExport;

/// Write the export as YAML with a header comment
pub fn export_run_yaml<W: Write>(export: &RunExport, writer: &mut W) -> ShelterResult<()> {
    let header = format!(
        "# Shelter run export\n# Generated: {}\n# App Version: {}\n# Amounts are in hundredths (dollars or pounds)\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| ShelterError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| ShelterError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, DonationType};
    use crate::services::AllocationEngine;
    use chrono::NaiveDate;

    #[test]
    fn test_export_yaml() {
        let mut engine = AllocationEngine::new();
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        engine.register("Ana", DonationType::Food, Amount::from_units(4), d, None);

        let export = RunExport::new(&engine, Vec::new(), 3);
        let mut buffer = Vec::new();
        export_run_yaml(&export, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# Shelter run export"));

        let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(value["metadata"]["donation_count"].as_u64(), Some(1));
        assert_eq!(
            value["inventory"]["daily_food_totals"]
                .as_sequence()
                .map(|s| s.len()),
            Some(3)
        );
    }
}
