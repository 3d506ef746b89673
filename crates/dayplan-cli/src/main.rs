//! Dayplan CLI Application
//!
//! Command-line front end for the dayplan daily activity planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use dayplan_core::PlannerBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_data_path(data_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    info!("Dayplan started with {}", planner.data_path().display());

    let cli = Cli::new(planner, TerminalRenderer::new(!no_color));
    match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Activity { command }) => cli.handle_activity_command(command).await,
        Some(Export(args)) => cli.export(args).await,
        Some(Import(args)) => cli.import(args).await,
        None => cli.list_plans().await,
    }
}
