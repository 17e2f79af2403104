//! Coercion of raw form text into optional filter bounds.
//!
//! Every function here is total: input that is empty or cannot be read as
//! the target type yields `None`, which the filter treats as "no constraint".
//! A present zero (`"0"`) is a real bound and yields `Some(0)`.

use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Integer bound from the leading signed digits of `text`, so `"2.5"` reads
/// as 2 and `"5e5"` as 5. Text with no leading digits yields `None`.
/// Values past the `i64` range saturate.
pub fn text_to_optional_bound(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };
    Some(signed.parse::<i64>().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

/// Calendar date bound from `YYYY-MM-DD` text.
pub fn text_to_optional_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

/// Free-text term; whitespace-only counts as absent.
pub fn text_to_optional_term(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
