//! Habit MCP Server - Main Entry Point
//!
//! This is the main entry point for the habit MCP server application.
//! The actual implementation is in the `habit_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use habit_mcp::rollover::spawn_rollover_task;
use habit_mcp::{HabitConfig, HabitServerHandler, logging};
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use tracing::info;

/// Habit MCP Server - daily habit streaks via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the habit data file
    file: String,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    let config = HabitConfig::load(args.config.as_deref())?;
    logging::init_logging(&config.log_filter);

    let handler = HabitServerHandler::new(&args.file, config.clone())?;
    let rollover = spawn_rollover_task(handler.today_tracker(), config.rollover_interval());
    info!(file = %args.file, "habit MCP server starting");

    let served = serve_stdio(handler).await;
    rollover.abort();
    served?;
    Ok(())
}
