//! Monthly totals, category ranking and chart series.

use serde::Serialize;

use super::month::MonthKey;
use super::record::ExpenseRecord;

/// Number of categories surfaced on the dashboard ranking.
pub const TOP_CATEGORY_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: u64,
}

/// Aggregated view of one month of expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub month: MonthKey,
    pub total: u64,
    pub record_count: usize,
    /// Per-category totals in first-encountered order.
    pub categories: Vec<CategoryTotal>,
    /// At most [`TOP_CATEGORY_LIMIT`] entries, highest total first.
    pub top_categories: Vec<CategoryTotal>,
}

impl Summary {
    pub fn category_total(&self, category: &str) -> Option<u64> {
        self.categories
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.total)
    }

    /// Every category ordered by total, descending. Ties keep first-seen order.
    pub fn ranked(&self) -> Vec<CategoryTotal> {
        rank(&self.categories)
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

/// Summarizes records whose date falls in `month`.
pub fn summarize(records: &[ExpenseRecord], month: MonthKey) -> Summary {
    let prefix = month.prefix();
    let mut total = 0u64;
    let mut record_count = 0usize;
    let mut categories: Vec<CategoryTotal> = Vec::new();

    for record in records.iter().filter(|record| record.in_month(&prefix)) {
        record_count += 1;
        total = total.saturating_add(record.amount);
        match categories
            .iter_mut()
            .find(|entry| entry.category == record.category)
        {
            Some(entry) => entry.total = entry.total.saturating_add(record.amount),
            None => categories.push(CategoryTotal {
                category: record.category.clone(),
                total: record.amount,
            }),
        }
    }

    let mut top_categories = rank(&categories);
    top_categories.truncate(TOP_CATEGORY_LIMIT);

    tracing::debug!(%month, total, record_count, "summarized expenses");

    Summary {
        month,
        total,
        record_count,
        categories,
        top_categories,
    }
}

fn rank(categories: &[CategoryTotal]) -> Vec<CategoryTotal> {
    let mut ranked = categories.to_vec();
    // sort_by is stable, so equal totals keep insertion order.
    ranked.sort_by(|a, b| b.total.cmp(&a.total));
    ranked
}

/// Spending for one calendar day, keyed `MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub day: String,
    pub total: u64,
}

/// Per-day totals for the month in first-seen order, for the spending bar chart.
pub fn daily_totals(records: &[ExpenseRecord], month: MonthKey) -> Vec<DailyTotal> {
    let prefix = month.prefix();
    let mut days: Vec<DailyTotal> = Vec::new();
    for record in records.iter().filter(|record| record.in_month(&prefix)) {
        let day = record.date.get(5..).unwrap_or_default();
        match days.iter_mut().find(|entry| entry.day == day) {
            Some(entry) => entry.total = entry.total.saturating_add(record.amount),
            None => days.push(DailyTotal {
                day: day.to_string(),
                total: record.amount,
            }),
        }
    }
    days
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub total: u64,
    /// Share of the month total, rounded to a whole percent.
    pub percent: u32,
}

/// Category proportions for the pie chart. Empty when nothing was spent.
pub fn category_shares(summary: &Summary) -> Vec<CategoryShare> {
    if summary.total == 0 {
        return Vec::new();
    }
    let total = summary.total as f64;
    summary
        .categories
        .iter()
        .map(|entry| CategoryShare {
            category: entry.category.clone(),
            total: entry.total,
            percent: (entry.total as f64 / total * 100.0).round() as u32,
        })
        .collect()
}
