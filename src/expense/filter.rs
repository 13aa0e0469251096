//! Category and month filters for the expense list.

use super::month::MonthKey;
use super::record::ExpenseRecord;

/// Label the expenses page uses for "every category".
pub const ALL_CATEGORIES: &str = "전체";

/// Category and month filter applied to the expense list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub category: Option<String>,
    pub month: Option<MonthKey>,
}

impl ExpenseFilter {
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts to one category. [`ALL_CATEGORIES`] clears the restriction.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (category != ALL_CATEGORIES).then_some(category);
        self
    }

    pub fn with_month(mut self, month: MonthKey) -> Self {
        self.month = Some(month);
        self
    }

    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |category| record.category == category);
        let month_ok = self
            .month
            .map_or(true, |month| record.in_month(&month.prefix()));
        category_ok && month_ok
    }

    pub fn apply<'a>(&self, records: &'a [ExpenseRecord]) -> Vec<&'a ExpenseRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }

    pub fn total(&self, records: &[ExpenseRecord]) -> u64 {
        records
            .iter()
            .filter(|record| self.matches(record))
            .fold(0u64, |acc, record| acc.saturating_add(record.amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Vec<ExpenseRecord> {
        let day = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap();
        vec![
            ExpenseRecord::new(day(4, 1), "식비", 10_000, "점심"),
            ExpenseRecord::new(day(4, 2), "교통", 1_450, "버스"),
            ExpenseRecord::new(day(3, 30), "식비", 7_000, "저녁"),
        ]
    }

    #[test]
    fn unfiltered_keeps_everything_in_order() {
        let records = sample();
        let filter = ExpenseFilter::all();
        assert_eq!(filter.apply(&records).len(), 3);
        assert_eq!(filter.total(&records), 18_450);
    }

    #[test]
    fn all_label_clears_category() {
        let filter = ExpenseFilter::all().with_category(ALL_CATEGORIES);
        assert_eq!(filter.category, None);
    }

    #[test]
    fn category_and_month_combine() {
        let records = sample();
        let filter = ExpenseFilter::all()
            .with_category("식비")
            .with_month(MonthKey::new(2025, 4).unwrap());
        let matched = filter.apply(&records);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].memo, "점심");
        assert_eq!(filter.total(&records), 10_000);
    }
}
