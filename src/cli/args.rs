//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run CSS Modules checks (undefined class accesses, unused
//!   classes)
//! - `init`: Initialize a cmlint configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::core::StylesheetSyntax;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Take the command if one was provided, otherwise print help.
    pub fn take_command_or_help(self) -> Option<Command> {
        match self.command {
            Some(command) => Some(command),
            None => {
                Self::command().print_help().ok();
                None
            }
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project directory to check
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Stylesheet grammar to assume for every import (default: by file
    /// extension)
    #[arg(long, value_enum)]
    pub syntax: Option<StylesheetSyntax>,

    /// Class name to always treat as used (repeatable; overrides config)
    #[arg(long = "mark-as-used", value_name = "CLASS")]
    pub mark_as_used: Vec<String>,
}

/// The individual checks the `check` command can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    UndefClass,
    UnusedClass,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![CheckRule::UndefClass, CheckRule::UnusedClass]
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub rules: Vec<CheckRule>,

    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check CSS Modules usage (undefined class accesses, unused classes)
    Check(CheckCommand),
    /// Initialize a new .cmlintrc.json configuration file
    Init,
}
