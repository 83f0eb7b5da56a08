//! Serde support for month-precision dates.
//!
//! Resume dates come from `<input type="month">` fields, so the wire format is
//! `YYYY-MM`. Full `YYYY-MM-DD` dates are accepted too; an empty string or
//! `null` means "not set". Values are stored as the first day of the month.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serializer};

/// Parses `YYYY-MM` or `YYYY-MM-DD`. Returns `Ok(None)` for blank input.
pub fn parse(s: &str) -> Result<Option<NaiveDate>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(NaiveDate::from_ymd_opt(date.year(), date.month(), 1));
    }

    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("invalid date '{s}', expected YYYY-MM"))
}

pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.serialize_str(&date.format("%Y-%m").to_string()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        None => Ok(None),
        Some(s) => parse(&s).map_err(serde::de::Error::custom),
    }
}
