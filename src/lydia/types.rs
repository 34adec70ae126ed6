//! Lydia payload types.

use crate::api::Payload;
use crate::{Error, ErrorContext, Result};
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Expected payload fields with the JSON shape each must have.
pub(crate) type PayloadSchema = &'static [(&'static str, fn(&Value) -> bool)];

/// Session metadata as returned by the create/get endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub session_id: String,
    pub language: String,
    pub available: bool,
    /// Unix timestamp (seconds). Fractional timestamps are truncated.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub expires: i64,
}

impl SessionInfo {
    pub(crate) const SCHEMA: PayloadSchema = &[
        ("session_id", Value::is_string),
        ("language", Value::is_string),
        ("available", Value::is_boolean),
        ("expires", Value::is_number),
    ];

    /// `expires` as a `SystemTime`. Negative timestamps clamp to the epoch.
    pub fn expires_at(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.expires.max(0) as u64)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ThoughtPayload {
    pub output: String,
}

impl ThoughtPayload {
    pub(crate) const SCHEMA: PayloadSchema = &[("output", Value::is_string)];
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    if let Some(secs) = number.as_i64() {
        return Ok(secs);
    }
    match number.as_f64() {
        Some(secs) if secs.is_finite() => Ok(secs.trunc() as i64),
        _ => Err(D::Error::custom(format!("invalid timestamp {}", number))),
    }
}

/// Decode a payload, reporting missing or mistyped fields as a malformed response.
///
/// The error names the offending field (`payload.<field>`) when `schema`
/// identifies it, and keeps the response's request id.
pub(crate) fn decode_payload<T: DeserializeOwned>(
    payload: Payload,
    path: &str,
    schema: PayloadSchema,
) -> Result<T> {
    let field_path = invalid_field(&payload.value, schema)
        .map(|field| format!("payload.{}", field))
        .unwrap_or_else(|| "payload".to_string());
    serde_json::from_value(payload.value).map_err(|e| {
        Error::malformed_with_context(
            format!("unexpected payload from {}", path),
            ErrorContext::new()
                .with_field_path(field_path)
                .with_details(e.to_string())
                .with_source("lydia")
                .with_request_id(payload.request_id),
        )
    })
}

/// First schema field that is absent or has the wrong JSON shape.
fn invalid_field(value: &Value, schema: PayloadSchema) -> Option<&'static str> {
    let obj = value.as_object()?;
    schema
        .iter()
        .find(|(name, valid)| !obj.get(*name).is_some_and(valid))
        .map(|(name, _)| *name)
}
