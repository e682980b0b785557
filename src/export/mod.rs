//! Export module for shelter runs
//!
//! Writes the result of a script run in machine-readable formats:
//! - JSON: step outcomes plus the final reports, with schema versioning
//! - YAML: the same document with a short header comment
//! - CSV: the final reports flattened to `section,type,key,amount` rows

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_reports_csv;
pub use json::{export_run_json, ExportMetadata, RunExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_run_yaml;
