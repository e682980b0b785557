//! `shelter check`: validate a script without running it

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::ShelterResult;
use crate::script::{Action, Script};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the operation script (.yaml, .yml or .json)
    pub script: PathBuf,
}

/// Handle the check command
pub fn handle_check_command(settings: &Settings, args: CheckArgs) -> ShelterResult<()> {
    let script = Script::load(&args.script)?;
    let actions = script.validate(settings)?;

    let (mut registrations, mut distributions, mut reports) = (0, 0, 0);
    for action in &actions {
        match action {
            Action::Register(_) => registrations += 1,
            Action::Distribute(_) => distributions += 1,
            Action::Report(_) => reports += 1,
        }
    }

    println!(
        "Script OK: {} steps ({} registrations, {} distributions, {} reports)",
        actions.len(),
        registrations,
        distributions,
        reports
    );

    Ok(())
}
