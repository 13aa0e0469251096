//! Spending measured against the monthly budget.

use serde::Serialize;

/// Default monthly spending ceiling, in whole won.
pub const DEFAULT_MONTHLY_BUDGET: u64 = 4_000_000;

/// Outcome of comparing a month's spending against its budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BudgetStatus {
    Over { over_amount: u64 },
    Within { used_percent: f64 },
}

impl BudgetStatus {
    pub fn evaluate(total: u64, budget: u64) -> Self {
        if total > budget {
            return BudgetStatus::Over {
                over_amount: total - budget,
            };
        }
        if budget == 0 {
            return BudgetStatus::Within { used_percent: 0.0 };
        }
        let percent = total as f64 / budget as f64 * 100.0;
        BudgetStatus::Within {
            used_percent: (percent * 10.0).round() / 10.0,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, BudgetStatus::Over { .. })
    }
}
