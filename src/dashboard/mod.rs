//! View models for the dashboard: summary cards and chart series.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    account::{asset_totals, Account},
    config::Config,
    currency::{format_money, format_signed_money, format_won_suffix},
    expense::{
        category_shares, daily_totals, fixed_total, schedule_for_month, summarize, BudgetStatus,
        CategoryShare, DailyTotal, ExpenseRecord, MonthKey, Summary,
    },
};

pub const COLOR_DEFAULT: &str = "#1d4ed8";
pub const COLOR_OVER_BUDGET: &str = "#ef4444";
pub const COLOR_WITHIN_BUDGET: &str = "#f97316";
pub const COLOR_TOP_CATEGORY: &str = "#facc15";
pub const COLOR_FIXED: &str = "#3b82f6";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    pub title: String,
    pub value: String,
    pub sub_label: Option<String>,
    pub color: &'static str,
}

impl SummaryCard {
    fn new(title: &str, value: String, sub_label: Option<String>, color: &'static str) -> Self {
        Self {
            title: title.to_string(),
            value,
            sub_label,
            color,
        }
    }
}

/// State of one fixed expense in the dashboard month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixedExpenseStatus {
    pub memo: String,
    pub amount: u64,
    pub day_of_month: u32,
    pub due: Option<NaiveDate>,
    pub recorded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub month: MonthKey,
    pub currency_symbol: String,
    pub summary: Summary,
    pub budget: BudgetStatus,
    pub cards: Vec<SummaryCard>,
    pub daily: Vec<DailyTotal>,
    pub shares: Vec<CategoryShare>,
    pub fixed: Vec<FixedExpenseStatus>,
}

impl Dashboard {
    /// Derives every dashboard figure for `month` from the full record list.
    pub fn build(
        records: &[ExpenseRecord],
        accounts: &[Account],
        config: &Config,
        month: MonthKey,
    ) -> Self {
        let summary = summarize(records, month);
        let budget = BudgetStatus::evaluate(summary.total, config.monthly_budget);
        let fixed: Vec<FixedExpenseStatus> = schedule_for_month(month, records, &config.recurring)
            .into_iter()
            .map(|charge| FixedExpenseStatus {
                memo: charge.rule.memo.clone(),
                amount: charge.rule.amount,
                day_of_month: charge.rule.day_of_month,
                due: charge.due,
                recorded: charge.recorded,
            })
            .collect();

        let symbol = config.currency_symbol.as_str();
        let cards = vec![
            assets_card(accounts, symbol),
            spending_card(&summary, budget, symbol),
            top_category_card(&summary, symbol),
            fixed_card(config, &fixed),
        ];

        Self {
            month,
            currency_symbol: config.currency_symbol.clone(),
            daily: daily_totals(records, month),
            shares: category_shares(&summary),
            summary,
            budget,
            cards,
            fixed,
        }
    }
}

fn assets_card(accounts: &[Account], symbol: &str) -> SummaryCard {
    let totals = asset_totals(accounts);
    let sub_label = if totals.by_purpose.is_empty() {
        "등록된 계좌 없음".to_string()
    } else {
        totals
            .by_purpose
            .iter()
            .map(|entry| {
                let purpose = if entry.purpose.is_empty() {
                    "미지정"
                } else {
                    entry.purpose.as_str()
                };
                format!("{purpose} {}", format_signed_money(entry.total, symbol))
            })
            .collect::<Vec<_>>()
            .join(" / ")
    };
    SummaryCard::new(
        "전체 자산",
        format_signed_money(totals.total, symbol),
        Some(sub_label),
        COLOR_DEFAULT,
    )
}

fn spending_card(summary: &Summary, budget: BudgetStatus, symbol: &str) -> SummaryCard {
    let (sub_label, color) = match budget {
        BudgetStatus::Over { over_amount } => (
            format!("⚠️ 예산 초과! ({})", format_won_suffix(over_amount)),
            COLOR_OVER_BUDGET,
        ),
        BudgetStatus::Within { used_percent } => (
            format!("예산의 {used_percent:.1}% 사용"),
            COLOR_WITHIN_BUDGET,
        ),
    };
    SummaryCard::new(
        "이달 총 지출",
        format_money(summary.total, symbol),
        Some(sub_label),
        color,
    )
}

fn top_category_card(summary: &Summary, symbol: &str) -> SummaryCard {
    let label = |index: usize| {
        summary
            .top_categories
            .get(index)
            .map(|entry| format!("{} {}", entry.category, format_money(entry.total, symbol)))
    };
    let value = label(0).unwrap_or_else(|| "-".to_string());
    let sub_label = match (label(1), label(2)) {
        (Some(second), Some(third)) => format!("{second} / {third}"),
        (Some(second), None) => second,
        _ => "데이터 부족".to_string(),
    };
    SummaryCard::new("TOP 지출 항목", value, Some(sub_label), COLOR_TOP_CATEGORY)
}

fn fixed_card(config: &Config, fixed: &[FixedExpenseStatus]) -> SummaryCard {
    let sub_label = if fixed.is_empty() {
        "등록된 고정 지출 없음".to_string()
    } else {
        let days = fixed
            .iter()
            .map(|item| format!("{} {}일", item.memo, item.day_of_month))
            .collect::<Vec<_>>()
            .join(" / ");
        format!("{days} 자동등록")
    };
    SummaryCard::new(
        "예정된 고정 지출",
        format_money(fixed_total(&config.recurring), &config.currency_symbol),
        Some(sub_label),
        COLOR_FIXED,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::ExpenseDraft;

    fn record(date: &str, category: &str, amount: u64) -> ExpenseRecord {
        ExpenseDraft::new(date, category, amount, "")
            .into_record()
            .unwrap()
    }

    fn april() -> MonthKey {
        MonthKey::new(2025, 4).unwrap()
    }

    #[test]
    fn empty_dashboard_has_placeholders() {
        let dashboard = Dashboard::build(&[], &[], &Config::default(), april());
        let titles: Vec<_> = dashboard.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            ["전체 자산", "이달 총 지출", "TOP 지출 항목", "예정된 고정 지출"]
        );
        assert_eq!(dashboard.cards[0].value, "₩0");
        assert_eq!(dashboard.cards[1].value, "₩0");
        assert_eq!(
            dashboard.cards[1].sub_label.as_deref(),
            Some("예산의 0.0% 사용")
        );
        assert_eq!(dashboard.cards[2].value, "-");
        assert_eq!(dashboard.cards[2].sub_label.as_deref(), Some("데이터 부족"));
        assert_eq!(dashboard.cards[3].value, "₩1,250,000");
        assert_eq!(
            dashboard.cards[3].sub_label.as_deref(),
            Some("월세 1일 / 보험료 5일 자동등록")
        );
    }

    #[test]
    fn over_budget_switches_label_and_color() {
        let records = vec![
            record("2025-04-01", "고정지출", 4_000_000),
            record("2025-04-09", "쇼핑", 500_000),
        ];
        let dashboard = Dashboard::build(&records, &[], &Config::default(), april());
        assert!(dashboard.budget.is_over());
        let card = &dashboard.cards[1];
        assert_eq!(card.value, "₩4,500,000");
        assert_eq!(card.sub_label.as_deref(), Some("⚠️ 예산 초과! (500,000원)"));
        assert_eq!(card.color, COLOR_OVER_BUDGET);
    }

    #[test]
    fn top_category_card_lists_ranked_categories() {
        let records = vec![
            record("2025-04-01", "식비", 30_000),
            record("2025-04-02", "쇼핑", 50_000),
            record("2025-04-03", "교통", 10_000),
            record("2025-04-04", "식비", 25_000),
        ];
        let dashboard = Dashboard::build(&records, &[], &Config::default(), april());
        let card = &dashboard.cards[2];
        assert_eq!(card.value, "식비 ₩55,000");
        assert_eq!(card.sub_label.as_deref(), Some("쇼핑 ₩50,000 / 교통 ₩10,000"));
        assert_eq!(dashboard.daily.len(), 4);
        assert_eq!(dashboard.shares.len(), 3);
    }

    #[test]
    fn top_category_card_with_two_categories_shows_only_the_runner_up() {
        let records = vec![
            record("2025-04-01", "식비", 30_000),
            record("2025-04-02", "쇼핑", 50_000),
        ];
        let dashboard = Dashboard::build(&records, &[], &Config::default(), april());
        let card = &dashboard.cards[2];
        assert_eq!(card.value, "쇼핑 ₩50,000");
        assert_eq!(card.sub_label.as_deref(), Some("식비 ₩30,000"));
    }

    #[test]
    fn configured_currency_symbol_reaches_every_card() {
        let config = Config {
            currency_symbol: "KRW ".into(),
            ..Config::default()
        };
        let records = vec![record("2025-04-02", "식비", 12_000)];
        let accounts = vec![Account::new("민수", "국민은행").with_balances(0, -5_000)];
        let dashboard = Dashboard::build(&records, &accounts, &config, april());
        assert_eq!(dashboard.currency_symbol, "KRW ");
        assert_eq!(dashboard.cards[0].value, "-KRW 5,000");
        assert_eq!(dashboard.cards[1].value, "KRW 12,000");
        assert_eq!(dashboard.cards[2].value, "식비 KRW 12,000");
        assert_eq!(dashboard.cards[3].value, "KRW 1,250,000");
    }

    #[test]
    fn assets_card_sums_accounts_by_purpose() {
        let accounts = vec![
            Account::new("민수", "국민은행")
                .with_kind("입출금", "운영자금")
                .with_balances(0, 8_250_000),
            Account::new("민수", "토스뱅크")
                .with_kind("입출금", "저축")
                .with_balances(0, 4_100_000),
        ];
        let dashboard = Dashboard::build(&[], &accounts, &Config::default(), april());
        assert_eq!(dashboard.cards[0].value, "₩12,350,000");
        assert_eq!(
            dashboard.cards[0].sub_label.as_deref(),
            Some("운영자금 ₩8,250,000 / 저축 ₩4,100,000")
        );
    }

    #[test]
    fn fixed_expenses_report_recorded_state() {
        let mut rent = record("2025-04-01", "고정지출", 1_000_000);
        rent.memo = "월세".into();
        let dashboard = Dashboard::build(&[rent], &[], &Config::default(), april());
        assert!(dashboard.fixed[0].recorded);
        assert!(!dashboard.fixed[1].recorded);
        assert_eq!(dashboard.fixed[1].due, NaiveDate::from_ymd_opt(2025, 4, 5));
    }
}
