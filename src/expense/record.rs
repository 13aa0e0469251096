use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ExpenseError;

/// Storage and display format for expense dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single logged spending event.
///
/// Records are immutable once created. The `date` is kept as the persisted
/// string so that malformed entries loaded from storage survive untouched;
/// they are simply excluded from date-based computations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub date: String,
    pub category: String,
    pub amount: u64,
    #[serde(default)]
    pub memo: String,
}

impl ExpenseRecord {
    /// Creates a record with a fresh identifier.
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: u64,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: date.format(DATE_FORMAT).to_string(),
            category: category.into(),
            amount,
            memo: memo.into(),
        }
    }

    /// Parses the stored date, returning `None` for malformed values.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    pub fn in_month(&self, month_prefix: &str) -> bool {
        self.date.starts_with(month_prefix)
    }
}

/// User-submitted expense awaiting validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub date: String,
    pub category: String,
    pub amount: u64,
    pub memo: String,
}

impl ExpenseDraft {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: u64,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            memo: memo.into(),
        }
    }

    /// Validates the draft and turns it into a record with a normalized date.
    pub fn into_record(self) -> Result<ExpenseRecord, ExpenseError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| ExpenseError::InvalidDate(self.date.clone()))?;
        let category = self.category.trim();
        if category.is_empty() {
            return Err(ExpenseError::EmptyCategory);
        }
        Ok(ExpenseRecord::new(date, category, self.amount, self.memo))
    }
}

/// Parses a user-entered amount. Grouping commas are accepted.
pub fn parse_amount(raw: &str) -> Result<u64, ExpenseError> {
    let cleaned: String = raw.trim().chars().filter(|ch| *ch != ',').collect();
    cleaned
        .parse::<u64>()
        .map_err(|_| ExpenseError::InvalidAmount(raw.to_string()))
}
