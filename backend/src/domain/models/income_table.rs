//! Domain model for the Earn Income table.
//!
//! One row per task level 0-20. Each row carries the DC for that level and
//! five payouts per day: the failure payout followed by the success payout for
//! trained, expert, master and legendary proficiency.
use serde::Serialize;
use shared::{Copper, Proficiency};

/// Highest task level on the table
pub const MAX_TASK_LEVEL: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IncomeTableRow {
    pub level: u32,
    pub dc: u32,
    /// [failure, trained, expert, master, legendary]
    pub payouts: [Copper; 5],
}

impl IncomeTableRow {
    pub fn failure_payout(&self) -> Copper {
        self.payouts[0]
    }

    pub fn success_payout(&self, proficiency: Proficiency) -> Copper {
        self.payouts[proficiency.payout_column()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IncomeLookupError {
    #[error("No income row for level {level}")]
    NoIncomeRow { level: u32 },
}

const fn cp(copper: u64) -> Copper {
    Copper::cp(copper)
}

const fn sp(silver: u64) -> Copper {
    Copper::sp(silver)
}

const fn gp(gold: u64) -> Copper {
    Copper::gp(gold)
}

const fn row(level: u32, dc: u32, payouts: [Copper; 5]) -> IncomeTableRow {
    IncomeTableRow { level, dc, payouts }
}

/// Indexed by task level
pub const INCOME_TABLE: [IncomeTableRow; 21] = [
    row(0, 14, [cp(1), cp(5), cp(5), cp(5), cp(5)]),
    row(1, 15, [cp(2), sp(2), sp(2), sp(2), sp(2)]),
    row(2, 16, [cp(4), sp(3), sp(3), sp(3), sp(3)]),
    row(3, 18, [cp(8), sp(5), sp(5), sp(5), sp(5)]),
    row(4, 19, [sp(1), sp(7), sp(8), sp(8), sp(8)]),
    row(5, 20, [sp(2), sp(9), gp(1), gp(1), gp(1)]),
    row(6, 22, [sp(3), gp(1).plus(sp(5)), gp(2), gp(2), gp(2)]),
    row(7, 23, [sp(4), gp(2), gp(2).plus(sp(5)), gp(2).plus(sp(5)), gp(2).plus(sp(5))]),
    row(8, 24, [sp(5), gp(2).plus(sp(5)), gp(3), gp(3), gp(3)]),
    row(9, 26, [sp(6), gp(3), gp(4), gp(4), gp(4)]),
    row(10, 27, [sp(7), gp(4), gp(5), gp(6), gp(6)]),
    row(11, 28, [sp(8), gp(5), gp(6), gp(8), gp(8)]),
    row(12, 30, [sp(9), gp(6), gp(8), gp(10), gp(10)]),
    row(13, 31, [gp(1), gp(7), gp(10), gp(15), gp(15)]),
    row(14, 32, [gp(1).plus(sp(5)), gp(8), gp(15), gp(20), gp(20)]),
    row(15, 34, [gp(2), gp(10), gp(20), gp(28), gp(28)]),
    row(16, 35, [gp(2).plus(sp(5)), gp(13), gp(25), gp(36), gp(40)]),
    row(17, 36, [gp(3), gp(15), gp(30), gp(45), gp(55)]),
    row(18, 38, [gp(4), gp(20), gp(45), gp(70), gp(90)]),
    row(19, 39, [gp(6), gp(30), gp(60), gp(100), gp(130)]),
    row(20, 40, [gp(8), gp(40), gp(75), gp(150), gp(200)]),
];

/// Per-day payout for a critical success on a level 20 task
pub fn critical_success_level_20(proficiency: Proficiency) -> Copper {
    match proficiency {
        Proficiency::Trained => gp(50),
        Proficiency::Expert => gp(90),
        Proficiency::Master => gp(175),
        Proficiency::Legendary => gp(300),
    }
}

pub fn income_row(level: u32) -> Option<&'static IncomeTableRow> {
    INCOME_TABLE.get(level as usize)
}

/// Same as [`income_row`] but reports a missing row as an error
pub fn require_income_row(level: u32) -> Result<&'static IncomeTableRow, IncomeLookupError> {
    income_row(level).ok_or(IncomeLookupError::NoIncomeRow { level })
}

pub fn dc_for_level(level: u32) -> Option<u32> {
    income_row(level).map(|row| row.dc)
}
