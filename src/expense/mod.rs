//! Expense records, recurring fixed costs, and monthly aggregation.

pub mod book;
pub mod budget;
pub mod filter;
pub mod month;
pub mod record;
pub mod recurring;
pub mod summary;

pub use book::ExpenseBook;
pub use budget::{BudgetStatus, DEFAULT_MONTHLY_BUDGET};
pub use filter::{ExpenseFilter, ALL_CATEGORIES};
pub use month::MonthKey;
pub use record::{parse_amount, ExpenseDraft, ExpenseRecord, DATE_FORMAT};
pub use recurring::{
    default_rules, fixed_total, generate, schedule_for_month, RecurringRule, ScheduledCharge,
    FIXED_COST_CATEGORY,
};
pub use summary::{
    category_shares, daily_totals, summarize, CategoryShare, CategoryTotal, DailyTotal, Summary,
    TOP_CATEGORY_LIMIT,
};
