//! Input validation helpers
//!
//! Centralized text length constants plus the handler-boundary conversions:
//! ISO date parsing and numeric coercion. Nothing here touches storage;
//! a failure is always a 400 before the repository is invoked.

use chrono::NaiveDate;
use serde_json::Value;

use crate::core::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: empleado nombre, cargo nombre
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Short free text: cargo reference on an empleado, sexo code
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> AppResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

// ── Handler-boundary conversions ────────────────────────────────────

/// Parse an optional ISO `YYYY-MM-DD` date string.
///
/// Empty strings count as absent rather than invalid, so a client sending
/// `"fecha_ingreso": ""` on an update leaves the stored value untouched.
pub fn parse_iso_date(value: Option<&str>, field: &str) -> AppResult<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::validation(format!("{field} must be a YYYY-MM-DD date"))),
    }
}

/// Convert a JSON value to i64, accepting numbers and numeric strings
pub fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Convert a JSON value to f64, accepting numbers and numeric strings
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
