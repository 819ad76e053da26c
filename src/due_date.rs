//! Due-date extraction from heterogeneous property encodings.
//!
//! Cards have stored their due date three different ways over time: a raw
//! epoch-millisecond number, that number as a string, and a JSON envelope
//! string of the form `{"from": <epoch-or-string>}` encoding a date range's
//! start. All of them resolve to one canonical epoch-millisecond integer
//! here; every failure path converges on the `0` sentinel ("unparseable or
//! absent"), which callers log and skip. Nothing in this module errors.

use serde::Deserialize;

use crate::types::PropertyValue;

/// Sentinel for an unparseable or absent due date. Never a valid date.
pub const NO_DUE_DATE: i64 = 0;

/// The `{"from": ...}` date-range envelope. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct DateEnvelope {
    from: Option<EnvelopeField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EnvelopeField {
    Number(f64),
    Text(String),
}

/// Resolve a raw due-date property value to canonical epoch milliseconds,
/// or [`NO_DUE_DATE`] when the value has no usable date in it.
pub fn resolve_due_date_ms(value: &PropertyValue) -> i64 {
    match value {
        PropertyValue::Number(n) => *n as i64,
        PropertyValue::Text(s) if s.starts_with('{') => parse_envelope(s),
        PropertyValue::Text(s) => s.parse::<i64>().unwrap_or(NO_DUE_DATE),
        PropertyValue::Unknown(_) => NO_DUE_DATE,
    }
}

fn parse_envelope(raw: &str) -> i64 {
    match serde_json::from_str::<DateEnvelope>(raw) {
        Ok(envelope) => match envelope.from {
            Some(EnvelopeField::Number(n)) => n as i64,
            Some(EnvelopeField::Text(t)) => t.parse::<i64>().unwrap_or(NO_DUE_DATE),
            None => NO_DUE_DATE,
        },
        Err(_) => NO_DUE_DATE,
    }
}
