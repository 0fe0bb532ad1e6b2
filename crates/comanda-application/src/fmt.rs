//! Format helpers.
//!
//! Centralizes how money and timestamps are rendered so the views never
//! repeat formatting logic.

use chrono::DateTime;

/// Formats a number as money: two decimals, dollar sign.
pub fn money(n: f64) -> String {
    format!("${:.2}", n)
}

/// Formats an RFC 3339 timestamp as a readable string.
///
/// An unparseable input is shown verbatim rather than erroring; timestamps
/// come from external records and are display-only here.
pub fn date(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_two_decimals() {
        assert_eq!(money(27.54), "$27.54");
        assert_eq!(money(10.0), "$10.00");
        assert_eq!(money(5.5), "$5.50");
    }

    #[test]
    fn test_date_formats_rfc3339() {
        assert_eq!(date("2024-03-05T14:30:00Z"), "2024-03-05 14:30");
    }

    #[test]
    fn test_date_falls_back_verbatim() {
        assert_eq!(date("yesterday-ish"), "yesterday-ish");
    }
}
