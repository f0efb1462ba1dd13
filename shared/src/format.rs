//! Display formatting for amounts and dates.

use chrono::{Datelike, NaiveDate};

use crate::dates::parse_transaction_date;

/// Format a USD amount with the currency code, e.g. `USD 1,234.50`.
///
/// With `always_show_cents` off, whole amounts drop the fraction (`USD 500`),
/// which is how transaction rows show them. Wallet cards always show cents.
pub fn format_currency(amount: f64, always_show_cents: bool) -> String {
    let show_cents = always_show_cents || amount.fract() != 0.0;
    let digits = if show_cents {
        format!("{:.2}", amount.abs())
    } else {
        format!("{:.0}", amount.abs())
    };

    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut formatted = String::new();
    if amount < 0.0 {
        formatted.push('-');
    }
    formatted.push_str("USD ");
    formatted.push_str(&group_thousands(whole));
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Transaction row date, e.g. `Mar 03, 2022`. Unparseable input is returned as-is.
pub fn format_transaction_date(raw: &str) -> String {
    match parse_transaction_date(raw) {
        Some(date) => date.format("%b %d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Chart axis label, e.g. `Apr 1, 2022`
pub fn format_chart_label(day: NaiveDate) -> String {
    format!("{} {}, {}", day.format("%b"), day.day(), day.year())
}
