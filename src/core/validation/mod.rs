//! Input validation for create and update payloads
//!
//! Pure functions over `serde_json::Value`: presence checks with the
//! original API's falsy semantics, typed field extraction, and format
//! checks for email, phone, date and time. Failure messages are part of
//! the API contract.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde_json::Value;
use uuid::Uuid;

use super::error::ValidationError;

/// Presence in the required-field sense. JSON `null`, `false`, zero, the
/// empty string, empty arrays and empty objects all count as missing.
fn value_is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Checks that every named field is present in the payload. Returns the
/// first missing field, in declaration order.
pub fn require_fields(payload: &Value, fields: &[&str]) -> Result<(), ValidationError> {
    for field in fields {
        if !value_is_present(&payload[*field]) {
            return Err(ValidationError::MissingField((*field).to_string()));
        }
    }
    Ok(())
}

/// Extracts a string field that [`require_fields`] already proved present.
/// A non-string value is rejected rather than coerced.
pub fn required_str(payload: &Value, field: &str) -> Result<String, ValidationError> {
    payload[field]
        .as_str()
        .map(ToOwned::to_owned)
        .ok_or_else(|| ValidationError::InvalidField(field.to_string()))
}

pub fn required_i64(payload: &Value, field: &str) -> Result<i64, ValidationError> {
    payload[field]
        .as_i64()
        .ok_or_else(|| ValidationError::InvalidField(field.to_string()))
}

pub fn required_f64(payload: &Value, field: &str) -> Result<f64, ValidationError> {
    payload[field]
        .as_f64()
        .ok_or_else(|| ValidationError::InvalidField(field.to_string()))
}

/// Extracts a reference field (`client_id`, `appointment_id`, ...) as a UUID.
pub fn required_uuid(payload: &Value, field: &str) -> Result<Uuid, ValidationError> {
    payload[field]
        .as_str()
        .and_then(|raw| Uuid::parse_str(raw).ok())
        .ok_or_else(|| ValidationError::InvalidField(field.to_string()))
}

/// Parses a path segment as an entity ID.
pub fn parse_id(raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw).map_err(|_| ValidationError::InvalidId)
}

/// Collects the string items of an optional JSON array field. A missing or
/// non-array value yields an empty list; non-string items are skipped.
pub fn string_list(payload: &Value, field: &str) -> Vec<String> {
    payload[field]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(ToOwned::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

/// Validates an email address. The empty string passes: optional fields only
/// fail when they carry a malformed value.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    if value.is_empty() {
        return Ok(());
    }
    let regex = EMAIL_REGEX.get_or_init(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").unwrap());
    if regex.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validates a phone number: digits, spaces, hyphens and parentheses only.
/// The empty string passes.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    if value.is_empty() {
        return Ok(());
    }
    let regex = PHONE_REGEX.get_or_init(|| Regex::new(r"^[\d\s\-()]+$").unwrap());
    if regex.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)
}

/// Parses a `HH:MM:SS` (24-hour) time.
pub fn parse_time(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S").map_err(|_| ValidationError::InvalidTime)
}
