//! Discord summary formatting for an Earn Income period.
//!
//! Builds the text block players paste into the downtime channel: who, when,
//! which skill, the task level and DC, the results and the money earned.
//! Everything here is pure; copying the text anywhere is up to the caller.

use chrono::{Datelike, Days, NaiveDate};
use log::info;
use shared::{Copper, DayResultCounts, DiscordSummaryInput, ResultOutcome};

use crate::domain::earnings_service::EarningsService;
use crate::domain::models::income_table::{dc_for_level, IncomeLookupError};

const EXPERIENCED_PROFESSIONAL_NOTE: &str = "*Experienced Professional applied*";

/// Currency string such as "2 gp, 5 sp"; empty for zero
pub fn format_copper(amount: Copper) -> String {
    amount.to_string()
}

/// Parse a YYYY-MM-DD calendar date
pub fn parse_end_date(end_date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(end_date.trim(), "%Y-%m-%d").ok()
}

pub fn format_mmdd(date: NaiveDate) -> String {
    format!("{:02}/{:02}", date.month(), date.day())
}

/// First day of a period of `days` days ending on `end_date`, as MM/DD.
/// Empty when the period is empty or the end date is unusable.
pub fn calculate_start_date(end_date: &str, days: u32) -> String {
    if days == 0 {
        return String::new();
    }
    parse_end_date(end_date)
        .and_then(|end| end.checked_sub_days(Days::new(u64::from(days - 1))))
        .map(format_mmdd)
        .unwrap_or_default()
}

/// Counts as shown to players: with Experienced Professional every critical
/// failure is listed as a failure.
pub fn displayed_counts(
    counts: &DayResultCounts,
    has_experienced_professional: bool,
) -> DayResultCounts {
    if has_experienced_professional {
        DayResultCounts {
            failure: counts.failure.saturating_add(counts.critical_failure),
            critical_failure: 0,
            ..*counts
        }
    } else {
        *counts
    }
}

/// "7 × Successes, 1 × Failures", or "None" when nothing was rolled
pub fn format_results(counts: &DayResultCounts) -> String {
    let parts: Vec<String> = ResultOutcome::ALL
        .iter()
        .filter(|outcome| counts.get(**outcome) > 0)
        .map(|outcome| format!("{} × {}", counts.get(*outcome), outcome.plural_label()))
        .collect();

    if parts.is_empty() {
        "None".to_string()
    } else {
        parts.join(", ")
    }
}

pub fn build_discord_summary(input: &DiscordSummaryInput) -> Result<String, IncomeLookupError> {
    let dc = dc_for_level(input.task_level).unwrap_or(0);
    let total = EarningsService::new().total_earnings(
        input.task_level,
        input.proficiency,
        &input.counts,
        input.has_experienced_professional,
        None,
    )?;

    let start_date = calculate_start_date(&input.end_date, input.days);
    let end_date = parse_end_date(&input.end_date).map(format_mmdd).unwrap_or_default();
    let shown = displayed_counts(&input.counts, input.has_experienced_professional);

    let mut lines = vec![
        format!("**Character:** {}", input.character),
        format!("**Days:** {} - {}", start_date, end_date),
        format!("**Skill Used:** {}", input.skill),
        format!("> *{}*", input.description),
        format!(
            "**Task Level Attempted:** {} Level {}; **DC** {}",
            input.proficiency.display_name(),
            input.task_level,
            dc
        ),
        format!("**Results:** {}", format_results(&shown)),
        format!("**Link:** {}", input.rolls_link),
        format!("**Money Earned:** {}", format_copper(total)),
    ];
    if input.has_experienced_professional {
        lines.push(EXPERIENCED_PROFESSIONAL_NOTE.to_string());
    }

    Ok(lines.join("\n"))
}

/// Summary service that handles Discord summary generation
#[derive(Clone, Default)]
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    pub fn build_discord_summary(
        &self,
        input: &DiscordSummaryInput,
    ) -> Result<String, IncomeLookupError> {
        info!(
            "Building summary for {} ({} days, level {} {})",
            input.character, input.days, input.task_level, input.proficiency
        );
        let summary = build_discord_summary(input)?;
        info!("Summary built: {} lines", summary.lines().count());
        Ok(summary)
    }
}
