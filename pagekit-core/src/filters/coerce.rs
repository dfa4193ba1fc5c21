//! Coercion from loose JSON values to column types.
//!
//! Shared by every entity filter so that all fields follow the same rules:
//! `null`, absent and `""` become `None`; anything else either coerces or
//! yields `PageError::InvalidFilterValue`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::FilterBag;
use crate::error::{PageError, Result};
use crate::models::product::MAX_PRICE_LEN;

/// Plain decimal literal, optional sign, no exponent
static DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)$").expect("invalid decimal regex"));

fn lookup<'a>(bag: &'a FilterBag, field: &str) -> Option<&'a Value> {
    match bag.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(value) => Some(value),
    }
}

fn raw(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// String field. Numbers are accepted in their textual form.
pub fn text(bag: &FilterBag, field: &'static str) -> Result<Option<String>> {
    match lookup(bag, field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(PageError::invalid_filter(field, raw(other), "a string")),
    }
}

/// 32-bit integer field, from a JSON integer or a base-10 string.
pub fn integer(bag: &FilterBag, field: &'static str) -> Result<Option<i32>> {
    let Some(value) = lookup(bag, field) else {
        return Ok(None);
    };
    let parsed = match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    };
    parsed
        .map(Some)
        .ok_or_else(|| PageError::invalid_filter(field, raw(value), "an integer"))
}

/// Decimal field, kept as exact text for a `numeric` cast. Text longer
/// than [`MAX_PRICE_LEN`] is rejected before it reaches the database.
pub fn decimal(bag: &FilterBag, field: &'static str) -> Result<Option<String>> {
    let Some(value) = lookup(bag, field) else {
        return Ok(None);
    };
    let text = match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.trim().to_owned()),
        _ => None,
    };
    match text {
        Some(text) if text.len() <= MAX_PRICE_LEN && DECIMAL_RE.is_match(&text) => {
            Ok(Some(text))
        }
        _ => Err(PageError::invalid_filter(field, raw(value), "a decimal number")),
    }
}

/// Boolean field: `true`/`false`, `"true"`/`"false"`, `"1"`/`"0"`, `1`/`0`.
pub fn boolean(bag: &FilterBag, field: &'static str) -> Result<Option<bool>> {
    let Some(value) = lookup(bag, field) else {
        return Ok(None);
    };
    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    };
    parsed
        .map(Some)
        .ok_or_else(|| PageError::invalid_filter(field, raw(value), "a boolean"))
}
