//! Utilities for date, time and money formatting
//!
//! Provides consistent formatting across the dashboard tables and forms
use chrono::{DateTime, NaiveDate, Utc};

/// Format a calendar date as DD.MM.YYYY
/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format a timestamp as DD.MM.YYYY HH:MM:SS, "-" when absent
pub fn format_datetime(datetime: Option<&DateTime<Utc>>) -> String {
    datetime
        .map(|dt| dt.format("%d.%m.%Y %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Value for `<input type="date">` (YYYY-MM-DD), empty when unset
pub fn date_input_value(date: Option<&NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Format a price with two decimals and a thin thousands separator
/// Example: 12345.5 -> "12 345.50"
pub fn format_price(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('\u{00a0}');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(&date), "15.03.2024");
        assert_eq!(date_input_value(Some(&date)), "2024-03-15");
        assert_eq!(date_input_value(None), "");
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_datetime(Some(&dt)), "31.12.2024 23:59:59");
        assert_eq!(format_datetime(None), "-");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(450.5), "450.50");
        assert_eq!(format_price(12345.5), "12\u{00a0}345.50");
        assert_eq!(format_price(1_000_000.0), "1\u{00a0}000\u{00a0}000.00");
        assert_eq!(format_price(-1200.0), "-1\u{00a0}200.00");
    }
}
