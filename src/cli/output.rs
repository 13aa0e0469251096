use colored::{ColoredString, Colorize};

use crate::{
    account::Account,
    currency::{format_money, format_signed_money},
    dashboard::{
        Dashboard, SummaryCard, COLOR_FIXED, COLOR_OVER_BUDGET, COLOR_TOP_CATEGORY,
        COLOR_WITHIN_BUDGET,
    },
    expense::ExpenseRecord,
};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Section,
}

pub fn message(kind: MessageKind, text: impl AsRef<str>) -> String {
    let text = text.as_ref();
    match kind {
        MessageKind::Info => text.to_string(),
        MessageKind::Success => format!("{} {}", "[✓]".green(), text),
        MessageKind::Warning => format!("{} {}", "[!]".yellow(), text),
        MessageKind::Section => format!("=== {} ===", text.trim()).bold().to_string(),
    }
}

fn tint(text: &str, color: &str) -> ColoredString {
    match color {
        COLOR_OVER_BUDGET => text.red(),
        COLOR_WITHIN_BUDGET => text.truecolor(249, 115, 22),
        COLOR_TOP_CATEGORY => text.yellow(),
        COLOR_FIXED => text.bright_blue(),
        _ => text.blue(),
    }
}

fn render_card(card: &SummaryCard) -> String {
    let mut lines = vec![
        format!("{}", card.title.dimmed()),
        format!("  {}", tint(&card.value, card.color).bold()),
    ];
    if let Some(sub) = &card.sub_label {
        lines.push(format!("  {sub}"));
    }
    lines.join("\n")
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let symbol = dashboard.currency_symbol.as_str();
    let mut out = vec![message(
        MessageKind::Section,
        format!("잔고리즘 대시보드 {}", dashboard.month),
    )];
    out.extend(dashboard.cards.iter().map(render_card));

    if !dashboard.daily.is_empty() {
        out.push(message(MessageKind::Section, "이달 지출 추이"));
        for day in &dashboard.daily {
            out.push(format!("  {}  {}", day.day, format_money(day.total, symbol)));
        }
    }
    if !dashboard.shares.is_empty() {
        out.push(message(MessageKind::Section, "카테고리별 지출 비중"));
        for share in &dashboard.shares {
            out.push(format!(
                "  {} {}% ({})",
                share.category,
                share.percent,
                format_money(share.total, symbol)
            ));
        }
    }
    out.join("\n")
}

pub fn render_expenses(records: &[&ExpenseRecord], total: u64, symbol: &str) -> String {
    let mut out: Vec<String> = records
        .iter()
        .map(|record| {
            format!(
                "{} | {} | {} | {} | {}",
                record.date,
                record.category,
                format_money(record.amount, symbol),
                record.memo,
                record.id.to_string().dimmed()
            )
        })
        .collect();
    if records.is_empty() {
        out.push("기록된 지출 없음".to_string());
    }
    out.push(format!("총 지출: {}", format_money(total, symbol).bold()));
    out.join("\n")
}

pub fn render_accounts(accounts: &[Account], symbol: &str) -> String {
    if accounts.is_empty() {
        return "등록된 계좌 없음".to_string();
    }
    accounts
        .iter()
        .enumerate()
        .map(|(index, account)| {
            let change = account.change();
            let change_text = if change < 0 {
                format_signed_money(change, symbol).red()
            } else {
                format!("+{}", format_signed_money(change, symbol)).green()
            };
            format!(
                "[{index}] {} | {} | {} | {} | {} | {} → {} ({})",
                account.owner,
                account.bank_name,
                account.nickname,
                account.account_type,
                account.purpose,
                format_signed_money(account.previous_amount, symbol),
                format_signed_money(account.current_amount, symbol),
                change_text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
