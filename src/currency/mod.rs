//! Currency formatting for dashboard and CLI output.

/// Default symbol, overridable through `Config::currency_symbol`.
pub const WON_SYMBOL: &str = "₩";
const GROUPING_SEPARATOR: char = ',';

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Groups thousands with commas: `1234567` → `1,234,567`.
pub fn format_unsigned(amount: u64) -> String {
    group_digits(&amount.to_string())
}

/// `₩1,000,000` for the won symbol.
pub fn format_money(amount: u64, symbol: &str) -> String {
    format!("{symbol}{}", format_unsigned(amount))
}

/// Signed balance with the symbol after the sign: `-₩320,000`.
pub fn format_signed_money(amount: i64, symbol: &str) -> String {
    let digits = format_unsigned(amount.unsigned_abs());
    if amount < 0 {
        format!("-{symbol}{digits}")
    } else {
        format!("{symbol}{digits}")
    }
}

/// `500,000원`
pub fn format_won_suffix(amount: u64) -> String {
    format!("{}원", format_unsigned(amount))
}
