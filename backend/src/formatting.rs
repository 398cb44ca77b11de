//! Shared string, date, and number formatters.
//!
//! Pure functions only: no side effects, no feature knowledge. Named by what
//! it does, not "utils".

use chrono::{DateTime, Utc};

/// Format a date relative to `now`: "just now", "5 minutes ago", and so on,
/// falling back to an absolute date beyond a week.
pub fn relative_from(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - date;
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        return "just now".to_owned();
    }
    if minutes < 60 {
        return format!("{minutes} minute{} ago", plural(minutes));
    }
    if hours < 24 {
        return format!("{hours} hour{} ago", plural(hours));
    }
    if days < 7 {
        return format!("{days} day{} ago", plural(days));
    }
    date.format("%b %-d, %Y").to_string()
}

/// Format a date relative to the current instant.
pub fn relative(date: DateTime<Utc>) -> String {
    relative_from(date, Utc::now())
}

fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Format a date as `YYYY-MM-DD`.
pub fn iso_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a cent amount as a currency string, e.g. `currency(4999, "USD")`
/// is `"$49.99"`. Unknown currency codes are prefixed verbatim.
pub fn currency(amount_cents: i64, code: &str) -> String {
    let sign = if amount_cents < 0 { "-" } else { "" };
    let magnitude = amount_cents.unsigned_abs();
    let units = thousands_u64(magnitude / 100);
    let cents = magnitude % 100;
    let symbol = match code {
        "USD" => "$",
        "EUR" => "\u{20ac}",
        "GBP" => "\u{a3}",
        _ => return format!("{sign}{code} {units}.{cents:02}"),
    };
    format!("{sign}{symbol}{units}.{cents:02}")
}

/// Format an integer with thousands separators: `1234567` → `"1,234,567"`.
pub fn thousands(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{}", thousands_u64(value.unsigned_abs()))
}

fn thousands_u64(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Truncate a string to `max_chars`, appending `…` when truncated. Operates
/// on characters, so multi-byte input never splits mid-codepoint.
pub fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_owned();
    }
    let mut truncated: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('\u{2026}');
    truncated
}

/// Uppercase the first letter of each whitespace-separated word.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start {
            at_word_start = false;
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert a camelCase or PascalCase string to kebab-case.
pub fn kebab_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut prev_lower = false;
    for c in value.chars() {
        if c.is_uppercase() {
            if prev_lower {
                result.push('-');
            }
            result.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
            result.push(c);
        }
    }
    result
}
