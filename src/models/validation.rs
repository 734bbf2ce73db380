use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{self, Deserializer, Visitor};
use std::fmt;

use crate::errors::ApiError;

/// Rendering used for every calendar date in responses, e.g. `Sun Jan 15 2023`.
pub const DISPLAY_DATE_FORMAT: &str = "%a %b %d %Y";

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%B %d %Y",
    DISPLAY_DATE_FORMAT,
];
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Parses a client-supplied calendar date. Timestamps keep only their UTC date.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
                .map(|dt| dt.date())
        })
        // Year and month alone name the first day of that month
        .or_else(|| NaiveDate::parse_from_str(&format!("{input}-01"), "%Y-%m-%d").ok())
}

/// Reads the leading integer of `input` the way form values are usually
/// coerced: `"30"`, `" 30.5"` and `"30min"` all yield 30.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Result cap for a log query. `None` means unbounded: non-numeric input and
/// zero both lift the cap, a negative value caps at its magnitude.
pub fn parse_limit(input: &str) -> Option<usize> {
    parse_int_prefix(input)
        .filter(|limit| *limit != 0)
        .and_then(|limit| usize::try_from(limit.unsigned_abs()).ok())
}

/// Treats a blank optional field the same as a missing one.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn required_text(value: Option<String>, field: &'static str) -> Result<String, ApiError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(ApiError::MissingField(field)),
    }
}

pub fn parse_duration(value: Option<&str>) -> Result<i32, ApiError> {
    let raw = non_blank(value).ok_or(ApiError::MissingField("duration"))?;

    parse_int_prefix(raw)
        .and_then(|minutes| i32::try_from(minutes).ok())
        .ok_or(ApiError::InvalidDuration)
}

/// Accepts strings, numbers and booleans for a text field so that JSON
/// bodies and URL-encoded forms deserialize into the same payload types.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientString;

    impl<'de> Visitor<'de> for LenientString {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, a number or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(LenientString)
}
