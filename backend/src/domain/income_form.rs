//! Earn Income request validation and defaults.
//!
//! The payout and summary functions trust their input. This service is the
//! caller-side check that runs before them: it catches out-of-range levels,
//! empty periods, unparseable end dates and more results than days.

use chrono::NaiveDate;
use log::{info, warn};
use shared::{
    DayResultCounts, DiscordSummaryInput, IncomeFormValidation, IncomeValidationError, Proficiency,
};

use crate::domain::models::income_table::MAX_TASK_LEVEL;
use crate::domain::summary_service::parse_end_date;

/// Limits and defaults for Earn Income requests
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeFormConfig {
    pub default_days: u32,
    pub max_task_level: u32,
    pub max_days: u32,
}

impl Default for IncomeFormConfig {
    fn default() -> Self {
        Self {
            default_days: 7,
            max_task_level: MAX_TASK_LEVEL,
            max_days: 365,
        }
    }
}

#[derive(Clone)]
pub struct IncomeFormService {
    config: IncomeFormConfig,
}

impl IncomeFormService {
    pub fn new() -> Self {
        Self {
            config: IncomeFormConfig::default(),
        }
    }

    pub fn with_config(config: IncomeFormConfig) -> Self {
        Self { config }
    }

    /// A blank request ending on `today`
    pub fn default_input(&self, today: NaiveDate) -> DiscordSummaryInput {
        DiscordSummaryInput {
            character: String::new(),
            end_date: today.format("%Y-%m-%d").to_string(),
            days: self.config.default_days,
            skill: String::new(),
            description: String::new(),
            task_level: 0,
            proficiency: Proficiency::Trained,
            counts: DayResultCounts::default(),
            rolls_link: String::new(),
            has_experienced_professional: false,
        }
    }

    pub fn validate(&self, input: &DiscordSummaryInput) -> IncomeFormValidation {
        let mut errors = Vec::new();
        let mut suggestions = Vec::new();

        if input.days == 0 {
            errors.push(IncomeValidationError::DaysNotPositive);
            suggestions.push(format!(
                "A typical downtime period is {} days",
                self.config.default_days
            ));
        } else if input.days > self.config.max_days {
            errors.push(IncomeValidationError::TooManyDays(self.config.max_days));
        }

        if input.task_level > self.config.max_task_level {
            errors.push(IncomeValidationError::TaskLevelOutOfRange(input.task_level));
            suggestions.push(format!("Task levels run from 0 to {}", self.config.max_task_level));
        }

        if parse_end_date(&input.end_date).is_none() {
            errors.push(IncomeValidationError::InvalidEndDate(input.end_date.clone()));
            suggestions.push("Enter the end date as YYYY-MM-DD".to_string());
        }

        let total = input.counts.total();
        if total > u64::from(input.days) {
            errors.push(IncomeValidationError::CountsExceedDays {
                total,
                days: input.days,
            });
            suggestions.push("Each downtime day produces exactly one result".to_string());
        }

        if errors.is_empty() {
            info!("Earn Income request for {} is valid", input.character);
        } else {
            warn!("Earn Income request for {} failed validation: {:?}", input.character, errors);
        }

        IncomeFormValidation {
            is_valid: errors.is_empty(),
            errors,
            suggestions,
        }
    }

    /// Get user-friendly error message for validation error
    pub fn get_error_message(&self, error: &IncomeValidationError) -> String {
        match error {
            IncomeValidationError::DaysNotPositive => {
                "Please enter at least one downtime day".to_string()
            }
            IncomeValidationError::TooManyDays(max) => {
                format!("Too many downtime days. Maximum is {}", max)
            }
            IncomeValidationError::TaskLevelOutOfRange(level) => {
                format!(
                    "Task level {} is out of range. Choose a level from 0 to {}",
                    level, self.config.max_task_level
                )
            }
            IncomeValidationError::InvalidEndDate(date) => {
                format!("Please enter a valid end date (like 2024-01-10): {}", date)
            }
            IncomeValidationError::CountsExceedDays { total, days } => {
                format!("You entered {} results but only {} downtime days", total, days)
            }
        }
    }

    pub fn get_error_messages(&self, errors: &[IncomeValidationError]) -> Vec<String> {
        errors.iter().map(|e| self.get_error_message(e)).collect()
    }

    pub fn get_config(&self) -> &IncomeFormConfig {
        &self.config
    }
}

impl Default for IncomeFormService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ResultOutcome;

    fn create_test_service() -> IncomeFormService {
        IncomeFormService::new()
    }

    fn create_valid_input() -> DiscordSummaryInput {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let mut input = create_test_service().default_input(today);
        input.character = "Bob".to_string();
        input.task_level = 5;
        input.counts = DayResultCounts::only(ResultOutcome::Success, 7);
        input
    }

    #[test]
    fn test_default_input() {
        let service = create_test_service();
        let input = service.default_input(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());

        assert_eq!(input.end_date, "2024-03-05");
        assert_eq!(input.days, 7);
        assert_eq!(input.task_level, 0);
        assert_eq!(input.proficiency, Proficiency::Trained);
        assert_eq!(input.counts, DayResultCounts::default());
        assert!(!input.has_experienced_professional);
    }

    #[test]
    fn test_validate_success() {
        let validation = create_test_service().validate(&create_valid_input());

        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());
        assert!(validation.suggestions.is_empty());
    }

    #[test]
    fn test_validate_zero_days() {
        let mut input = create_valid_input();
        input.days = 0;
        input.counts = DayResultCounts::default();

        let validation = create_test_service().validate(&input);

        assert!(!validation.is_valid);
        assert_eq!(validation.errors, vec![IncomeValidationError::DaysNotPositive]);
        assert!(!validation.suggestions.is_empty());
    }

    #[test]
    fn test_validate_counts_exceed_days() {
        let mut input = create_valid_input();
        input.counts.failure = 2;

        let validation = create_test_service().validate(&input);

        assert!(!validation.is_valid);
        assert_eq!(
            validation.errors,
            vec![IncomeValidationError::CountsExceedDays { total: 9, days: 7 }]
        );
    }

    #[test]
    fn test_validate_level_and_date() {
        let mut input = create_valid_input();
        input.task_level = 21;
        input.end_date = "01/10/2024".to_string();

        let validation = create_test_service().validate(&input);

        assert!(!validation.is_valid);
        assert!(validation.errors.contains(&IncomeValidationError::TaskLevelOutOfRange(21)));
        assert!(validation
            .errors
            .contains(&IncomeValidationError::InvalidEndDate("01/10/2024".to_string())));
    }

    #[test]
    fn test_custom_config_limits_days() {
        let service = IncomeFormService::with_config(IncomeFormConfig {
            max_days: 5,
            ..IncomeFormConfig::default()
        });

        let validation = service.validate(&create_valid_input());

        assert!(!validation.is_valid);
        assert_eq!(validation.errors, vec![IncomeValidationError::TooManyDays(5)]);
    }

    #[test]
    fn test_error_messages() {
        let service = create_test_service();

        let error = IncomeValidationError::CountsExceedDays { total: 9, days: 7 };
        assert_eq!(
            service.get_error_message(&error),
            "You entered 9 results but only 7 downtime days"
        );

        let error = IncomeValidationError::TaskLevelOutOfRange(30);
        assert!(service.get_error_message(&error).contains("from 0 to 20"));

        let messages = service.get_error_messages(&[
            IncomeValidationError::DaysNotPositive,
            IncomeValidationError::TooManyDays(365),
        ]);
        assert_eq!(messages.len(), 2);
    }
}
