use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::ExpenseError;

use super::month::MonthKey;
use super::record::{ExpenseDraft, ExpenseRecord};
use super::recurring::{self, RecurringRule};
use super::summary::{self, Summary};

/// Owns the expense list and is the only place it is mutated.
///
/// The recurring generator and the aggregator both work on borrowed slices;
/// this type merges generator output and applies user additions/deletions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseBook {
    records: Vec<ExpenseRecord>,
}

impl ExpenseBook {
    pub fn new(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&ExpenseRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Validates and appends a user-submitted expense.
    pub fn add(&mut self, draft: ExpenseDraft) -> Result<Uuid, ExpenseError> {
        let record = draft.into_record()?;
        let id = record.id;
        tracing::info!(%id, date = %record.date, category = %record.category, amount = record.amount, "expense added");
        self.records.push(record);
        Ok(id)
    }

    pub fn remove(&mut self, id: Uuid) -> Result<ExpenseRecord, ExpenseError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(ExpenseError::NotFound(id))?;
        let removed = self.records.remove(index);
        tracing::info!(%id, "expense removed");
        Ok(removed)
    }

    /// Merges recurring expenses due `today`, returning how many were added.
    pub fn apply_recurring(&mut self, today: NaiveDate, rules: &[RecurringRule]) -> usize {
        let generated = recurring::generate(today, &self.records, rules);
        let added = generated.len();
        for record in &generated {
            tracing::info!(memo = %record.memo, date = %record.date, amount = record.amount, "registered fixed expense");
        }
        self.records.extend(generated);
        added
    }

    pub fn summarize(&self, month: MonthKey) -> Summary {
        summary::summarize(&self.records, month)
    }
}
