use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ActivityCommands, FileArgs, PlanCommands};

/// Command-line interface for the Dayplan daily activity planner
///
/// Dayplan keeps named plans made of timestamped activities. The whole
/// collection lives in a single file that is loaded on start and written
/// back after every change.
#[derive(Parser)]
#[command(version, about, name = "dayplan")]
pub struct Args {
    /// Path to the plan file. Defaults to $XDG_DATA_HOME/dayplan/plans.dat
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Dayplan CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage activities within plans
    #[command(alias = "a")]
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },
    /// Save all plans to another file
    Export(FileArgs),
    /// Replace all plans with the contents of another file
    Import(FileArgs),
}
