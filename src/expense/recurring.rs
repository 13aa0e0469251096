//! Fixed monthly obligations and their automatic registration.
//!
//! Recurrence is evaluated lazily: whenever the expense list is loaded the
//! caller asks [`generate`] which rules fall due today and merges the result.
//! There is no background scheduler.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::month::MonthKey;
use super::record::{ExpenseRecord, DATE_FORMAT};

/// Category tag used by the built-in fixed expenses.
pub const FIXED_COST_CATEGORY: &str = "고정지출";

/// A fixed-amount obligation that is materialized on a given day each month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecurringRule {
    pub category: String,
    pub memo: String,
    pub amount: u64,
    pub day_of_month: u32,
}

impl RecurringRule {
    pub fn new(
        category: impl Into<String>,
        memo: impl Into<String>,
        amount: u64,
        day_of_month: u32,
    ) -> Self {
        Self {
            category: category.into(),
            memo: memo.into(),
            amount,
            day_of_month,
        }
    }

    pub fn has_valid_day(&self) -> bool {
        (1..=31).contains(&self.day_of_month)
    }

    /// Date string this rule would carry in `today`'s month.
    fn due_key(&self, today: NaiveDate) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            today.year(),
            today.month(),
            self.day_of_month
        )
    }

    fn materialize(&self, date: String) -> ExpenseRecord {
        ExpenseRecord {
            id: uuid::Uuid::new_v4(),
            date,
            category: self.category.clone(),
            amount: self.amount,
            memo: self.memo.clone(),
        }
    }
}

/// Rent on the 1st and insurance on the 5th.
pub fn default_rules() -> Vec<RecurringRule> {
    vec![
        RecurringRule::new(FIXED_COST_CATEGORY, "월세", 1_000_000, 1),
        RecurringRule::new(FIXED_COST_CATEGORY, "보험료", 250_000, 5),
    ]
}

/// Returns the records for rules due `today` that are not yet in `existing`.
///
/// A rule is due when its day matches today's day of month. Days that do not
/// exist in the current month (31 in April) never fire that month. The input
/// is never modified; merging the output is the caller's job, after which a
/// second call on the same day returns nothing.
pub fn generate(
    today: NaiveDate,
    existing: &[ExpenseRecord],
    rules: &[RecurringRule],
) -> Vec<ExpenseRecord> {
    let mut generated: Vec<ExpenseRecord> = Vec::new();

    for rule in rules.iter().filter(|rule| rule.day_of_month == today.day()) {
        let due_key = rule.due_key(today);
        let satisfied = existing
            .iter()
            .chain(generated.iter())
            .any(|record| record.memo == rule.memo && record.date == due_key);
        if !satisfied {
            generated.push(rule.materialize(due_key));
        }
    }

    generated
}

/// A rule's occurrence within a specific month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledCharge<'a> {
    pub rule: &'a RecurringRule,
    /// `None` when the rule's day does not exist in the month.
    pub due: Option<NaiveDate>,
    pub recorded: bool,
}

/// Lists every rule with its due date in `month` and whether it was already recorded.
pub fn schedule_for_month<'a>(
    month: MonthKey,
    existing: &[ExpenseRecord],
    rules: &'a [RecurringRule],
) -> Vec<ScheduledCharge<'a>> {
    rules
        .iter()
        .map(|rule| {
            let due = month.day(rule.day_of_month);
            let recorded = due.is_some_and(|date| {
                let key = date.format(DATE_FORMAT).to_string();
                existing
                    .iter()
                    .any(|record| record.memo == rule.memo && record.date == key)
            });
            ScheduledCharge {
                rule,
                due,
                recorded,
            }
        })
        .collect()
}

pub fn fixed_total(rules: &[RecurringRule]) -> u64 {
    rules
        .iter()
        .fold(0u64, |acc, rule| acc.saturating_add(rule.amount))
}
