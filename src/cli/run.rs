//! `shelter run`: execute an operation script

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use tracing::info;

use crate::audit::AuditLogger;
use crate::config::{Settings, ShelterPaths};
use crate::error::{ShelterError, ShelterResult};
use crate::export::{export_reports_csv, export_run_json, export_run_yaml, RunExport};
use crate::script::{ReportKind, Script, ScriptRunner};

/// Output format for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Step outcomes and report tables
    #[default]
    Text,
    /// Full run export as JSON
    Json,
    /// Full run export as YAML
    Yaml,
    /// Final reports as CSV rows
    Csv,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the operation script (.yaml, .yml or .json)
    pub script: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Which final report(s) to show in text output
    #[arg(short, long, value_enum, default_value_t = ReportKind::All)]
    pub report: ReportKind,

    /// Do not write to the audit log
    #[arg(long)]
    pub no_audit: bool,
}

/// Handle the run command
pub fn handle_run_command(
    paths: &ShelterPaths,
    settings: &Settings,
    args: RunArgs,
) -> ShelterResult<()> {
    let script = Script::load(&args.script)?;

    let mut runner = ScriptRunner::new(settings);
    if settings.audit_enabled && !args.no_audit {
        paths.ensure_directories()?;
        runner = runner.with_audit(AuditLogger::new(paths.audit_log()));
    }

    let outcomes = runner.run(&script)?;
    let rejected = outcomes.iter().filter(|o| o.is_rejection()).count();
    info!(steps = outcomes.len(), rejected, "script finished");

    let mut writer = open_output(args.output.as_deref())?;

    match args.format {
        OutputFormat::Text => {
            for outcome in &outcomes {
                writeln!(writer, "{}", outcome.describe(settings))?;
            }
            if !outcomes.is_empty() {
                writeln!(writer)?;
            }
            let summary = runner.snapshot(args.report);
            write!(writer, "{}", summary.describe(settings))?;
        }
        OutputFormat::Json => {
            let export = RunExport::new(runner.engine(), outcomes, settings.forecast_days);
            export_run_json(&export, &mut writer)?;
        }
        OutputFormat::Yaml => {
            let export = RunExport::new(runner.engine(), outcomes, settings.forecast_days);
            export_run_yaml(&export, &mut writer)?;
        }
        OutputFormat::Csv => {
            let export = RunExport::new(runner.engine(), outcomes, settings.forecast_days);
            export_reports_csv(&export.inventory, &export.donors, &mut writer)?;
        }
    }

    writer.flush()?;

    if let Some(path) = &args.output {
        eprintln!("Output written to: {}", path.display());
    }

    Ok(())
}

fn open_output(path: Option<&Path>) -> ShelterResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ShelterError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
