//! Command-line interface for the Earn Income calculator.
//!
//! Every command returns its output as a string; `main` prints it.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use log::info;
use shared::{Copper, DayResultCounts, Proficiency, ResultOutcome};
use std::path::PathBuf;

use crate::domain::models::income_table::INCOME_TABLE;
use crate::domain::{format_copper, EarningsService, IncomeFormService, SummaryService};
use crate::io::input_loader::load_summary_input;

#[derive(Debug, Parser)]
#[command(name = "earn-income", about = "Earn Income payouts and Discord summaries", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a Discord summary from a JSON request (stdin when no file is given)
    Summary {
        #[arg(long)]
        input: Option<PathBuf>,
        /// Skip the days/level/date checks
        #[arg(long)]
        skip_validation: bool,
    },
    /// Payout for a single downtime day
    Daily {
        #[arg(long)]
        level: u32,
        #[arg(long)]
        proficiency: Proficiency,
        #[arg(long)]
        outcome: ResultOutcome,
    },
    /// Payout for a whole downtime period
    Total {
        #[arg(long)]
        level: u32,
        #[arg(long)]
        proficiency: Proficiency,
        #[arg(long, default_value_t = 0)]
        critical_success: u32,
        #[arg(long, default_value_t = 0)]
        success: u32,
        #[arg(long, default_value_t = 0)]
        failure: u32,
        #[arg(long, default_value_t = 0)]
        critical_failure: u32,
        /// Length of the period; a single result type is applied to every day
        #[arg(long)]
        days: Option<u32>,
        #[arg(long)]
        experienced_professional: bool,
    },
    /// Print the Earn Income table
    Table,
}

pub fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Command::Summary { input, skip_validation } => {
            let request = load_summary_input(input.as_deref())?;
            if !skip_validation {
                let form_service = IncomeFormService::new();
                let validation = form_service.validate(&request);
                if !validation.is_valid {
                    let messages = form_service.get_error_messages(&validation.errors);
                    bail!("Invalid Earn Income request:\n{}", messages.join("\n"));
                }
            }
            Ok(SummaryService::new().build_discord_summary(&request)?)
        }
        Command::Daily { level, proficiency, outcome } => {
            let amount = EarningsService::new().daily_earnings(level, proficiency, outcome)?;
            Ok(display_amount(amount))
        }
        Command::Total {
            level,
            proficiency,
            critical_success,
            success,
            failure,
            critical_failure,
            days,
            experienced_professional,
        } => {
            let counts = DayResultCounts {
                critical_success,
                success,
                failure,
                critical_failure,
            };
            info!("Computing total for level {} {} with {:?}", level, proficiency, counts);
            let amount = EarningsService::new().total_earnings(
                level,
                proficiency,
                &counts,
                experienced_professional,
                days,
            )?;
            Ok(display_amount(amount))
        }
        Command::Table => Ok(render_income_table()),
    }
}

/// Zero renders as "0 cp" on the command line so the output is never blank
fn display_amount(amount: Copper) -> String {
    if amount.is_zero() {
        "0 cp".to_string()
    } else {
        format_copper(amount)
    }
}

pub fn render_income_table() -> String {
    let mut lines = vec![format!(
        "{:>5}  {:>3}  {:<14}  {:<14}  {:<14}  {:<14}  {:<14}",
        "Level", "DC", "Failure", "Trained", "Expert", "Master", "Legendary"
    )];
    for row in INCOME_TABLE.iter() {
        let payouts: Vec<String> = row
            .payouts
            .iter()
            .map(|amount| format!("{:<14}", amount.to_string()))
            .collect();
        lines.push(format!("{:>5}  {:>3}  {}", row.level, row.dc, payouts.join("  ").trim_end()));
    }
    lines.join("\n")
}
