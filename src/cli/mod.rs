//! Command-line interface layer.

use anyhow::Result;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(command) = args.take_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Command::Check(cmd) => {
            let result = commands::check::check(cmd)?;
            report::print(&result);

            Ok(if result.error_count > 0 {
                ExitStatus::Failure
            } else {
                ExitStatus::Success
            })
        }
        Command::Init => commands::init::init(),
    }
}
