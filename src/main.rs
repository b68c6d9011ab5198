use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use expense_planner::cli::{
    handle_categories_command, handle_config_command, handle_run_command, OutputFormat,
};
use expense_planner::config::{PlannerPaths, Settings};
use expense_planner::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Record and edit expenses against a fixed budget",
    long_about = "Expense Planner keeps a list of expenses against a fixed budget, \
                  rejecting entries that would overspend it. The `run` command \
                  replays a session file of budget, add, edit and remove steps."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a session file (YAML, or JSON by extension)
    Run {
        /// Path to the session file
        file: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Fail on the first rejected step
        #[arg(long)]
        strict: bool,
        /// Date used for expenses without one (YYYY-MM-DD)
        #[arg(long, env = "EXPENSE_PLANNER_TODAY")]
        today: Option<chrono::NaiveDate>,
    },

    /// List expense categories
    Categories,

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PlannerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);

    match cli.command {
        Commands::Run {
            file,
            format,
            strict,
            today,
        } => {
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            handle_run_command(&settings, &file, format, strict, today)?;
        }
        Commands::Categories => handle_categories_command(),
        Commands::Config { init } => handle_config_command(&paths, &settings, init)?,
    }

    Ok(())
}
