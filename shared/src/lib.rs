use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;

/// Amount of money in copper pieces (1 sp = 10 cp, 1 gp = 100 cp)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Copper(pub u64);

impl Copper {
    pub const ZERO: Copper = Copper(0);

    pub const fn cp(copper: u64) -> Self {
        Copper(copper)
    }

    pub const fn sp(silver: u64) -> Self {
        Copper(silver * 10)
    }

    pub const fn gp(gold: u64) -> Self {
        Copper(gold * 100)
    }

    /// Sum of two amounts, usable in const table definitions
    pub const fn plus(self, other: Copper) -> Self {
        Copper(self.0 + other.0)
    }

    pub fn gold_part(&self) -> u64 {
        self.0 / 100
    }

    pub fn silver_part(&self) -> u64 {
        (self.0 % 100) / 10
    }

    pub fn copper_part(&self) -> u64 {
        self.0 % 10
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Copper {
    type Output = Copper;

    fn add(self, rhs: Copper) -> Copper {
        Copper(self.0 + rhs.0)
    }
}

impl Mul<u64> for Copper {
    type Output = Copper;

    fn mul(self, rhs: u64) -> Copper {
        Copper(self.0 * rhs)
    }
}

impl Sum for Copper {
    fn sum<I: Iterator<Item = Copper>>(iter: I) -> Copper {
        iter.fold(Copper::ZERO, Add::add)
    }
}

/// Renders "2 gp, 5 sp" style strings; zero renders as an empty string.
impl fmt::Display for Copper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            (self.gold_part(), "gp"),
            (self.silver_part(), "sp"),
            (self.copper_part(), "cp"),
        ];
        let rendered: Vec<String> = parts
            .iter()
            .filter(|(amount, _)| *amount > 0)
            .map(|(amount, unit)| format!("{} {}", amount, unit))
            .collect();
        write!(f, "{}", rendered.join(", "))
    }
}

/// Skill proficiency rank, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Trained,
    Expert,
    Master,
    Legendary,
}

impl Proficiency {
    pub const ALL: [Proficiency; 4] = [
        Proficiency::Trained,
        Proficiency::Expert,
        Proficiency::Master,
        Proficiency::Legendary,
    ];

    /// Column of the income table payouts tuple for this rank (column 0 is the failure payout)
    pub fn payout_column(&self) -> usize {
        match self {
            Proficiency::Trained => 1,
            Proficiency::Expert => 2,
            Proficiency::Master => 3,
            Proficiency::Legendary => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Trained => "trained",
            Proficiency::Expert => "expert",
            Proficiency::Master => "master",
            Proficiency::Legendary => "legendary",
        }
    }

    /// Capitalized name for display ("Trained", "Expert", ...)
    pub fn display_name(&self) -> &'static str {
        match self {
            Proficiency::Trained => "Trained",
            Proficiency::Expert => "Expert",
            Proficiency::Master => "Master",
            Proficiency::Legendary => "Legendary",
        }
    }

    pub fn is_expert_or_higher(&self) -> bool {
        *self >= Proficiency::Expert
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Proficiency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trained" => Ok(Proficiency::Trained),
            "expert" => Ok(Proficiency::Expert),
            "master" => Ok(Proficiency::Master),
            "legendary" => Ok(Proficiency::Legendary),
            _ => Err(format!("Invalid proficiency: {}", s)),
        }
    }
}

/// Outcome of a single downtime day's check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultOutcome {
    CriticalSuccess,
    Success,
    Failure,
    CriticalFailure,
}

impl ResultOutcome {
    pub const ALL: [ResultOutcome; 4] = [
        ResultOutcome::CriticalSuccess,
        ResultOutcome::Success,
        ResultOutcome::Failure,
        ResultOutcome::CriticalFailure,
    ];

    /// Plural label used in the results line
    pub fn plural_label(&self) -> &'static str {
        match self {
            ResultOutcome::CriticalSuccess => "Critical Successes",
            ResultOutcome::Success => "Successes",
            ResultOutcome::Failure => "Failures",
            ResultOutcome::CriticalFailure => "Critical Failures",
        }
    }
}

impl FromStr for ResultOutcome {
    type Err = String;

    /// Accepts camelCase, kebab-case and snake_case spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "criticalsuccess" => Ok(ResultOutcome::CriticalSuccess),
            "success" => Ok(ResultOutcome::Success),
            "failure" => Ok(ResultOutcome::Failure),
            "criticalfailure" => Ok(ResultOutcome::CriticalFailure),
            _ => Err(format!("Invalid result outcome: {}", s)),
        }
    }
}

/// Number of downtime days that produced each outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayResultCounts {
    #[serde(default)]
    pub critical_success: u32,
    #[serde(default)]
    pub success: u32,
    #[serde(default)]
    pub failure: u32,
    #[serde(default)]
    pub critical_failure: u32,
}

impl DayResultCounts {
    /// Counts where every day of the period produced `outcome`
    pub fn only(outcome: ResultOutcome, count: u32) -> Self {
        let mut counts = Self::default();
        *counts.get_mut(outcome) = count;
        counts
    }

    pub fn get(&self, outcome: ResultOutcome) -> u32 {
        match outcome {
            ResultOutcome::CriticalSuccess => self.critical_success,
            ResultOutcome::Success => self.success,
            ResultOutcome::Failure => self.failure,
            ResultOutcome::CriticalFailure => self.critical_failure,
        }
    }

    pub fn get_mut(&mut self, outcome: ResultOutcome) -> &mut u32 {
        match outcome {
            ResultOutcome::CriticalSuccess => &mut self.critical_success,
            ResultOutcome::Success => &mut self.success,
            ResultOutcome::Failure => &mut self.failure,
            ResultOutcome::CriticalFailure => &mut self.critical_failure,
        }
    }

    /// Total number of days across all outcomes
    pub fn total(&self) -> u64 {
        ResultOutcome::ALL
            .iter()
            .map(|outcome| self.get(*outcome) as u64)
            .sum()
    }

    /// Outcomes with a positive count, in canonical order
    pub fn nonzero_outcomes(&self) -> Vec<ResultOutcome> {
        ResultOutcome::ALL
            .iter()
            .copied()
            .filter(|outcome| self.get(*outcome) > 0)
            .collect()
    }
}

/// Everything needed to build a Discord summary of an Earn Income period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordSummaryInput {
    pub character: String,
    /// Last day of the period (YYYY-MM-DD)
    pub end_date: String,
    /// Downtime days used
    pub days: u32,
    pub skill: String,
    pub description: String,
    /// Task level attempted (0-20)
    pub task_level: u32,
    pub proficiency: Proficiency,
    pub counts: DayResultCounts,
    /// Link to the posted rolls
    pub rolls_link: String,
    #[serde(default)]
    pub has_experienced_professional: bool,
}

/// Validation result for an Earn Income request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeFormValidation {
    pub is_valid: bool,
    pub errors: Vec<IncomeValidationError>,
    pub suggestions: Vec<String>,
}

/// Specific validation errors for Earn Income requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum IncomeValidationError {
    DaysNotPositive,
    TooManyDays(u32),
    TaskLevelOutOfRange(u32),
    InvalidEndDate(String),
    CountsExceedDays { total: u64, days: u32 },
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncomeValidationError::DaysNotPositive => write!(f, "Downtime days must be at least 1"),
            IncomeValidationError::TooManyDays(max) => {
                write!(f, "Downtime days cannot exceed {}", max)
            }
            IncomeValidationError::TaskLevelOutOfRange(level) => {
                write!(f, "Task level {} is out of range", level)
            }
            IncomeValidationError::InvalidEndDate(date) => write!(f, "Invalid end date: {}", date),
            IncomeValidationError::CountsExceedDays { total, days } => {
                write!(f, "Result counts ({}) exceed downtime days ({})", total, days)
            }
        }
    }
}

impl std::error::Error for IncomeValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copper_display() {
        assert_eq!(Copper(0).to_string(), "");
        assert_eq!(Copper(250).to_string(), "2 gp, 5 sp");
        assert_eq!(Copper(101).to_string(), "1 gp, 1 cp");
        assert_eq!(Copper(9).to_string(), "9 cp");
        assert_eq!(Copper(1234).to_string(), "12 gp, 3 sp, 4 cp");
        assert_eq!(Copper(30).to_string(), "3 sp");
    }

    #[test]
    fn test_copper_constructors_and_arithmetic() {
        assert_eq!(Copper::sp(2), Copper(20));
        assert_eq!(Copper::gp(1).plus(Copper::sp(5)), Copper(150));
        assert_eq!(Copper(15) * 4, Copper(60));
        assert_eq!(Copper(15) + Copper(5), Copper(20));

        let total: Copper = vec![Copper(1), Copper(2), Copper(3)].into_iter().sum();
        assert_eq!(total, Copper(6));
    }

    #[test]
    fn test_proficiency_ordering_and_columns() {
        assert!(Proficiency::Trained < Proficiency::Expert);
        assert!(Proficiency::Master < Proficiency::Legendary);
        assert!(!Proficiency::Trained.is_expert_or_higher());
        assert!(Proficiency::Expert.is_expert_or_higher());

        let columns: Vec<usize> = Proficiency::ALL.iter().map(|p| p.payout_column()).collect();
        assert_eq!(columns, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_proficiency_parse_and_display() {
        assert_eq!("trained".parse::<Proficiency>().unwrap(), Proficiency::Trained);
        assert_eq!("Legendary".parse::<Proficiency>().unwrap(), Proficiency::Legendary);
        assert!("untrained".parse::<Proficiency>().is_err());

        assert_eq!(Proficiency::Master.display_name(), "Master");
        assert_eq!(Proficiency::Master.to_string(), "master");
    }

    #[test]
    fn test_result_outcome_parse() {
        assert_eq!("criticalSuccess".parse::<ResultOutcome>(), Ok(ResultOutcome::CriticalSuccess));
        assert_eq!("critical-failure".parse::<ResultOutcome>(), Ok(ResultOutcome::CriticalFailure));
        assert_eq!("critical_success".parse::<ResultOutcome>(), Ok(ResultOutcome::CriticalSuccess));
        assert_eq!("Success".parse::<ResultOutcome>().unwrap(), ResultOutcome::Success);
        assert!("botch".parse::<ResultOutcome>().is_err());
    }

    #[test]
    fn test_day_result_counts_helpers() {
        let counts = DayResultCounts {
            critical_success: 1,
            success: 0,
            failure: 3,
            critical_failure: 2,
        };

        assert_eq!(counts.total(), 6);
        assert_eq!(
            counts.nonzero_outcomes(),
            vec![
                ResultOutcome::CriticalSuccess,
                ResultOutcome::Failure,
                ResultOutcome::CriticalFailure
            ]
        );

        let only = DayResultCounts::only(ResultOutcome::Success, 7);
        assert_eq!(only.success, 7);
        assert_eq!(only.total(), 7);
    }

    #[test]
    fn test_summary_input_json_defaults_experienced_professional() {
        let json = r#"{
            "character": "Bob",
            "endDate": "2024-01-10",
            "days": 7,
            "skill": "Crafting",
            "description": "Forging nails",
            "taskLevel": 5,
            "proficiency": "trained",
            "counts": {"criticalSuccess": 0, "success": 7, "failure": 0, "criticalFailure": 0},
            "rollsLink": "https://example.com/rolls"
        }"#;

        let input: DiscordSummaryInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.character, "Bob");
        assert_eq!(input.proficiency, Proficiency::Trained);
        assert_eq!(input.counts.success, 7);
        assert!(!input.has_experienced_professional);

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["taskLevel"], 5);
        assert_eq!(value["hasExperiencedProfessional"], false);
        assert_eq!(value["counts"]["criticalFailure"], 0);
    }

    #[test]
    fn test_validation_error_display() {
        let error = IncomeValidationError::CountsExceedDays { total: 9, days: 7 };
        assert_eq!(error.to_string(), "Result counts (9) exceed downtime days (7)");
        assert_eq!(
            IncomeValidationError::DaysNotPositive.to_string(),
            "Downtime days must be at least 1"
        );
    }
}
