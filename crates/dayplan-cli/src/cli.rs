//! Command definitions and their handlers.
//!
//! Each command has a clap argument struct that converts into the matching
//! `dayplan_core::params` type, so clap attributes stay out of the core:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! Commands that change plans write the collection back to the data file
//! before returning.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use dayplan_core::{
    display::{CreateResult, OperationStatus, RemoveResult},
    params::{AddActivity, CreatePlan, PlanFile, PlanRef, RemoveActivity},
    Planner,
};
use jiff::{civil::DateTime, tz::TimeZone, Timestamp};
use log::debug;

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Create a new plan
///
/// The plan starts with a default activity covering the next hour.
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Title of the plan
    pub title: String,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan { title: val.title }
    }
}

/// Select a plan by its number
#[derive(Args)]
pub struct PlanNumberArgs {
    #[arg(help = "Number of the plan as shown by `plan list`")]
    pub plan: usize,
}

impl From<PlanNumberArgs> for PlanRef {
    fn from(val: PlanNumberArgs) -> Self {
        PlanRef { number: val.plan }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List all plans
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a plan with all of its activities
    #[command(alias = "s")]
    Show(PlanNumberArgs),
    /// Show activity count and average duration of a plan
    #[command(alias = "st")]
    Stats(PlanNumberArgs),
}

/// Add an activity to the end of a plan
///
/// Times accept RFC 3339 (`2024-03-04T08:00:00+01:00`) or a local date and
/// time (`2024-03-04 08:00`). The start must be before the end.
#[derive(Args)]
pub struct AddActivityArgs {
    #[arg(help = "Number of the plan to add the activity to")]
    pub plan: usize,
    /// Name of the activity
    pub name: String,
    #[arg(short, long, default_value = "", help = "Optional description")]
    pub description: String,
    #[arg(short, long, value_parser = parse_timestamp, help = "When the activity starts")]
    pub start: Timestamp,
    #[arg(short, long, value_parser = parse_timestamp, help = "When the activity ends")]
    pub end: Timestamp,
}

impl From<AddActivityArgs> for AddActivity {
    fn from(val: AddActivityArgs) -> Self {
        AddActivity {
            plan: val.plan,
            name: val.name,
            description: val.description,
            start_time: val.start,
            end_time: val.end,
        }
    }
}

/// Remove an activity from a plan
///
/// Remaining activities are renumbered so indexes stay contiguous.
#[derive(Args)]
pub struct RemoveActivityArgs {
    #[arg(help = "Number of the plan to remove the activity from")]
    pub plan: usize,
    #[arg(help = "Index of the activity within the plan")]
    pub index: u32,
}

impl From<RemoveActivityArgs> for RemoveActivity {
    fn from(val: RemoveActivityArgs) -> Self {
        RemoveActivity {
            plan: val.plan,
            index: val.index,
        }
    }
}

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// Add an activity to a plan
    #[command(alias = "a")]
    Add(AddActivityArgs),
    /// Remove an activity from a plan
    #[command(aliases = ["r", "rm"])]
    Remove(RemoveActivityArgs),
}

/// A plan file to export to or import from
#[derive(Args)]
pub struct FileArgs {
    /// Path of the file
    pub path: PathBuf,
}

impl From<FileArgs> for PlanFile {
    fn from(val: FileArgs) -> Self {
        PlanFile { path: val.path }
    }
}

/// Parses an RFC 3339 timestamp, or a civil date-time in the system zone.
fn parse_timestamp(value: &str) -> std::result::Result<Timestamp, String> {
    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Ok(timestamp);
    }
    let civil: DateTime = value
        .parse()
        .map_err(|e| format!("invalid date-time '{value}': {e}"))?;
    civil
        .to_zoned(TimeZone::system())
        .map(|zoned| zoned.timestamp())
        .map_err(|e| format!("invalid local time '{value}': {e}"))
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs commands against a planner and renders the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let params: CreatePlan = args.into();
                let created = self
                    .planner
                    .create_plan(&params)
                    .await
                    .context("Failed to create plan")?;
                self.persist().await?;
                self.renderer.render(&CreateResult::new(created).to_string())
            }
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => {
                let details = self
                    .planner
                    .show_plan(&args.into())
                    .await
                    .context("Failed to show plan")?;
                self.renderer.render(&details.to_string())
            }
            PlanCommands::Stats(args) => {
                let stats = self
                    .planner
                    .plan_statistics(&args.into())
                    .await
                    .context("Failed to compute statistics")?;
                self.renderer.render(&stats.to_string())
            }
        }
    }

    pub async fn handle_activity_command(&self, command: ActivityCommands) -> Result<()> {
        match command {
            ActivityCommands::Add(args) => {
                let params: AddActivity = args.into();
                let activity = self
                    .planner
                    .add_activity(&params)
                    .await
                    .context("Failed to add activity")?;
                self.persist().await?;
                self.renderer
                    .render(&CreateResult::new(activity).to_string())
            }
            ActivityCommands::Remove(args) => {
                let params: RemoveActivity = args.into();
                let activity = self
                    .planner
                    .remove_activity(&params)
                    .await
                    .context("Failed to remove activity")?;
                self.persist().await?;
                let result = RemoveResult {
                    plan_number: params.plan,
                    activity,
                };
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn list_plans(&self) -> Result<()> {
        let summaries = self.planner.list_plans().await;
        self.renderer.render(&summaries.to_string())
    }

    pub async fn export(&self, args: FileArgs) -> Result<()> {
        let params: PlanFile = args.into();
        self.planner
            .save_to(&params)
            .await
            .with_context(|| format!("Failed to export plans to {}", params.path.display()))?;
        let status =
            OperationStatus::success(format!("Exported plans to {}", params.path.display()));
        self.renderer.render(&status.to_string())
    }

    pub async fn import(&self, args: FileArgs) -> Result<()> {
        let params: PlanFile = args.into();
        let loaded = self
            .planner
            .load_from(&params)
            .await
            .with_context(|| format!("Failed to import plans from {}", params.path.display()))?;

        let status = if loaded {
            self.persist().await?;
            OperationStatus::success(format!("Imported plans from {}", params.path.display()))
        } else {
            OperationStatus::skipped(format!("No plan file at {}", params.path.display()))
        };
        self.renderer.render(&status.to_string())
    }

    async fn persist(&self) -> Result<()> {
        debug!("Saving plans to {}", self.planner.data_path().display());
        self.planner.save().await.with_context(|| {
            format!(
                "Failed to save plans to {}",
                self.planner.data_path().display()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339_timestamp() {
        let parsed = parse_timestamp("2024-03-04T08:00:00Z").unwrap();
        assert_eq!(parsed, Timestamp::from_second(1_709_539_200).unwrap());

        let offset = parse_timestamp("2024-03-04T09:00:00+01:00").unwrap();
        assert_eq!(offset, parsed);
    }

    #[test]
    fn test_parse_civil_timestamp() {
        let parsed = parse_timestamp("2024-03-04 08:00").unwrap();
        let expected = "2024-03-04T08:00"
            .parse::<DateTime>()
            .unwrap()
            .to_zoned(TimeZone::system())
            .unwrap()
            .timestamp();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_invalid_timestamp() {
        let error = parse_timestamp("next tuesday").unwrap_err();
        assert!(error.contains("next tuesday"));
    }
}
