//! Lenient date deserialization.
//!
//! The backend stores dates as full ISO timestamps ("2024-03-15T00:00:00.000Z")
//! while forms work with plain calendar dates ("2024-03-15"). Both are accepted;
//! only the date part is kept.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse "YYYY-MM-DD" or the date part of an ISO datetime
pub fn parse(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

pub fn format(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
}
