//! CLI command handlers
//!
//! Bridges clap argument parsing with the session runner and the display
//! helpers.

pub mod session;

pub use session::{SessionReport, SessionRunner, SessionScript};

use chrono::NaiveDate;
use clap::ValueEnum;
use std::path::Path;
use tracing::info;

use crate::config::{PlannerPaths, Settings};
use crate::display::{
    format_category_list, format_category_spending, format_expense_table, format_summary,
};
use crate::error::PlannerResult;
use crate::models::CATEGORIES;

/// How `run` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Full JSON report
    Json,
}

/// Replay a session file and print the outcome
pub fn handle_run_command(
    settings: &Settings,
    file: &Path,
    format: OutputFormat,
    strict: bool,
    today: NaiveDate,
) -> PlannerResult<()> {
    let script = SessionScript::load(file)?;
    let report = SessionRunner::new(settings, today)
        .strict(strict)
        .run(&script)?;

    match format {
        OutputFormat::Table => print!("{}", render_report(&report, settings)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Render a session report for the terminal
pub fn render_report(report: &SessionReport, settings: &Settings) -> String {
    let mut output = String::new();

    for outcome in report.rejected() {
        output.push_str(&format!(
            "Step {} ({}) rejected: {}\n",
            outcome.step,
            outcome.action,
            outcome.message.as_deref().unwrap_or("")
        ));
    }
    if report.rejected().next().is_some() {
        output.push('\n');
    }

    output.push_str(&format_expense_table(&report.state, settings));
    output.push('\n');
    output.push_str(&format_summary(&report.summary, settings));

    let spending = format_category_spending(&report.spending, settings);
    if !spending.is_empty() {
        output.push('\n');
        output.push_str(&spending);
    }

    output
}

/// Print the category table
pub fn handle_categories_command() {
    print!("{}", format_category_list(CATEGORIES));
}

/// Print resolved paths and settings, optionally writing the settings file
pub fn handle_config_command(
    paths: &PlannerPaths,
    settings: &Settings,
    init: bool,
) -> PlannerResult<()> {
    if init {
        settings.save(paths)?;
        info!(path = %paths.settings_file().display(), "settings written");
    }

    println!("Expense Planner Configuration");
    println!("=============================");
    println!();
    println!("Paths:");
    println!("  Base directory: {}", paths.base_dir().display());
    println!(
        "  Settings file:  {}{}",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not created)" }
    );
    println!();
    println!("Settings:");
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}
