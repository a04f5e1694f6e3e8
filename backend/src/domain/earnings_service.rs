//! Earn Income payout rules.
//!
//! Turns a task level, proficiency and a set of day results into copper.
//! Critical successes pay as a success one task level higher, except on a
//! level 20 task where a fixed bonus applies. Critical failures pay nothing
//! unless the Experienced Professional rule upgrades them to failures.

use log::debug;
use serde::Serialize;
use shared::{Copper, DayResultCounts, Proficiency, ResultOutcome};

use crate::domain::models::income_table::{
    critical_success_level_20, require_income_row, IncomeLookupError, MAX_TASK_LEVEL,
};

/// Payout for a single downtime day with the given outcome
pub fn daily_earnings(
    level: u32,
    proficiency: Proficiency,
    outcome: ResultOutcome,
) -> Result<Copper, IncomeLookupError> {
    match outcome {
        ResultOutcome::CriticalFailure => Ok(Copper::ZERO),
        ResultOutcome::CriticalSuccess if level == MAX_TASK_LEVEL => {
            Ok(critical_success_level_20(proficiency))
        }
        ResultOutcome::CriticalSuccess => {
            let next_level = level
                .checked_add(1)
                .ok_or(IncomeLookupError::NoIncomeRow { level })?;
            let row = require_income_row(next_level)?;
            Ok(row.success_payout(proficiency))
        }
        ResultOutcome::Success => Ok(require_income_row(level)?.success_payout(proficiency)),
        ResultOutcome::Failure => Ok(require_income_row(level)?.failure_payout()),
    }
}

/// Total payout for a downtime period.
///
/// When exactly one outcome has a nonzero count and `days` is positive, that
/// outcome is taken to cover the whole period and its count becomes `days`.
pub fn total_earnings(
    level: u32,
    proficiency: Proficiency,
    counts: &DayResultCounts,
    has_experienced_professional: bool,
    days: Option<u32>,
) -> Result<Copper, IncomeLookupError> {
    Ok(earnings_breakdown(level, proficiency, counts, has_experienced_professional, days)?.total)
}

/// Counts after applying the single-result expansion
pub fn expand_single_result(counts: &DayResultCounts, days: Option<u32>) -> DayResultCounts {
    let nonzero = counts.nonzero_outcomes();
    match (nonzero.as_slice(), days) {
        ([outcome], Some(days)) if days > 0 => DayResultCounts::only(*outcome, days),
        _ => *counts,
    }
}

/// One outcome's share of a period's earnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutcomeEarnings {
    pub outcome: ResultOutcome,
    pub days: u32,
    pub rate: Copper,
    pub subtotal: Copper,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EarningsBreakdown {
    pub lines: Vec<OutcomeEarnings>,
    pub total: Copper,
}

/// Per-outcome earnings with the Experienced Professional rules applied
pub fn earnings_breakdown(
    level: u32,
    proficiency: Proficiency,
    counts: &DayResultCounts,
    has_experienced_professional: bool,
    days: Option<u32>,
) -> Result<EarningsBreakdown, IncomeLookupError> {
    let counts = expand_single_result(counts, days);
    let failure_rate = daily_earnings(level, proficiency, ResultOutcome::Failure)?;

    let mut lines = Vec::with_capacity(ResultOutcome::ALL.len());
    for outcome in ResultOutcome::ALL {
        let rate = match outcome {
            ResultOutcome::CriticalSuccess | ResultOutcome::Success => {
                daily_earnings(level, proficiency, outcome)?
            }
            ResultOutcome::Failure
                if has_experienced_professional && proficiency.is_expert_or_higher() =>
            {
                failure_rate * 2
            }
            ResultOutcome::Failure => failure_rate,
            // Upgraded to a failure, never doubled
            ResultOutcome::CriticalFailure if has_experienced_professional => failure_rate,
            ResultOutcome::CriticalFailure => Copper::ZERO,
        };
        let day_count = counts.get(outcome);
        lines.push(OutcomeEarnings {
            outcome,
            days: day_count,
            rate,
            subtotal: rate * day_count as u64,
        });
    }

    let total = lines.iter().map(|line| line.subtotal).sum();
    Ok(EarningsBreakdown { lines, total })
}

/// Service wrapper around the payout rules
#[derive(Clone, Default)]
pub struct EarningsService;

impl EarningsService {
    pub fn new() -> Self {
        Self
    }

    pub fn daily_earnings(
        &self,
        level: u32,
        proficiency: Proficiency,
        outcome: ResultOutcome,
    ) -> Result<Copper, IncomeLookupError> {
        let amount = daily_earnings(level, proficiency, outcome)?;
        debug!("Daily earnings for level {} {} {:?}: {} cp", level, proficiency, outcome, amount.0);
        Ok(amount)
    }

    pub fn total_earnings(
        &self,
        level: u32,
        proficiency: Proficiency,
        counts: &DayResultCounts,
        has_experienced_professional: bool,
        days: Option<u32>,
    ) -> Result<Copper, IncomeLookupError> {
        let total = total_earnings(level, proficiency, counts, has_experienced_professional, days)?;
        debug!(
            "Total earnings for level {} {} {:?} (EP: {}, days: {:?}): {} cp",
            level, proficiency, counts, has_experienced_professional, days, total.0
        );
        Ok(total)
    }

    pub fn breakdown(
        &self,
        level: u32,
        proficiency: Proficiency,
        counts: &DayResultCounts,
        has_experienced_professional: bool,
        days: Option<u32>,
    ) -> Result<EarningsBreakdown, IncomeLookupError> {
        earnings_breakdown(level, proficiency, counts, has_experienced_professional, days)
    }
}
