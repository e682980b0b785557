use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shelter_cli::cli::{
    handle_audit_command, handle_check_command, handle_run_command, AuditArgs, CheckArgs, RunArgs,
};
use shelter_cli::config::{Settings, ShelterPaths};

/// Environment variable holding the tracing filter directive
const LOG_ENV: &str = "SHELTER_LOG";

#[derive(Parser)]
#[command(
    name = "shelter",
    author = "Kaylee Beyene",
    version,
    about = "Donation tracking and distribution allocation for food shelters",
    long_about = "shelter records money and food donations and allocates distributions \
                  against them: money oldest donation first, food soonest expiry first. \
                  Operations are read from a YAML or JSON script and run in order."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute an operation script and print the results
    Run(RunArgs),

    /// Parse and validate a script without running it
    Check(CheckArgs),

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent audit log entries
    Audit(AuditArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = ShelterPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Run(args)) => handle_run_command(&paths, &settings, args)?,
        Some(Commands::Check(args)) => handle_check_command(&settings, args)?,
        Some(Commands::Init) => {
            println!("Initializing shelter-cli at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("shelter-cli Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Weight unit:     {}", settings.weight_unit);
            println!("  Anonymous donor: {}", settings.anonymous_donor);
            println!("  Forecast days:   {}", settings.forecast_days);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        Some(Commands::Audit(args)) => handle_audit_command(&paths, args)?,
        None => {
            println!("shelter - Donation tracking and distribution allocation");
            println!();
            println!("Run 'shelter --help' for usage information.");
            println!("Run 'shelter run <SCRIPT>' to execute an operation script.");
        }
    }

    Ok(())
}
