use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{backend_error, malformed_envelope_error, payload_mismatch_error, Error};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorItem {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ErrorItem {
    pub fn new(message: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: kind.into(),
        }
    }
}

/// Payloads the `data` field can be cast to. `check` enforces the domain
/// invariants serde cannot express (coordinate bounds, non-empty names) and
/// names the first offending field.
pub trait Payload: DeserializeOwned {
    fn check(&self) -> Result<(), Error>;
}

impl<T: Payload> Payload for Vec<T> {
    fn check(&self) -> Result<(), Error> {
        for item in self {
            item.check()?;
        }

        Ok(())
    }
}

#[derive(Deserialize)]
struct RawEnvelope {
    success: Option<bool>,
    error: Option<bool>,
    message: Option<String>,
    errors: Option<Vec<ErrorItem>>,
    data: Option<Value>,
    timestamp: Option<String>,
}

/// An envelope whose outer shape has been checked. `data` stays opaque until
/// the caller casts it against the shape its endpoint promises.
#[derive(Clone, Debug)]
pub struct ValidatedResponse {
    pub success: bool,
    pub error: bool,
    pub message: Option<String>,
    pub errors: Option<Vec<ErrorItem>>,
    pub data: Value,
    pub timestamp: DateTime<Utc>,
}

pub fn validate(raw: Value) -> Result<ValidatedResponse, Error> {
    if !raw.is_object() {
        return Err(malformed_envelope_error("response body is not an object"));
    }

    let envelope: RawEnvelope =
        serde_json::from_value(raw).map_err(|err| malformed_envelope_error(&err.to_string()))?;

    let success = envelope
        .success
        .ok_or_else(|| malformed_envelope_error("`success` is missing"))?;
    let error = envelope
        .error
        .ok_or_else(|| malformed_envelope_error("`error` is missing"))?;

    if success == error {
        return Err(malformed_envelope_error(
            "exactly one of `success` and `error` must be true",
        ));
    }

    if error && !envelope.errors.as_ref().map_or(false, |e| !e.is_empty()) {
        return Err(malformed_envelope_error(
            "`errors` must be a non-empty list when `error` is true",
        ));
    }

    let timestamp = envelope
        .timestamp
        .ok_or_else(|| malformed_envelope_error("`timestamp` is missing"))?;
    let timestamp = DateTime::parse_from_rfc3339(&timestamp)
        .map_err(|_| malformed_envelope_error("`timestamp` is not an ISO-8601 datetime"))?
        .with_timezone(&Utc);

    Ok(ValidatedResponse {
        success,
        error,
        message: envelope.message,
        errors: envelope.errors,
        data: envelope.data.unwrap_or(Value::Null),
        timestamp,
    })
}

impl ValidatedResponse {
    /// Folds a well-formed backend rejection into the error channel. A
    /// rejection is an expected outcome, distinct from a contract violation.
    pub fn require_success(self) -> Result<Self, Error> {
        if self.error {
            let message = self
                .message
                .unwrap_or_else(|| "backend rejected the request".into());

            return Err(backend_error(message, self.errors.unwrap_or_default()));
        }

        Ok(self)
    }

    pub fn cast<T: Payload>(&self) -> Result<T, Error> {
        if self.data.is_null() {
            return Err(payload_mismatch_error("`data` is missing"));
        }

        let payload: T = serde_json::from_value(self.data.clone())
            .map_err(|err| payload_mismatch_error(&err.to_string()))?;

        payload.check()?;

        Ok(payload)
    }
}

/// Success-side envelope builder; serializes to a body `validate` accepts.
#[derive(Clone, Debug, Serialize)]
pub struct ResponseBody<T> {
    pub success: bool,
    pub error: bool,
    pub message: Option<String>,
    pub errors: Option<Vec<ErrorItem>>,
    pub data: Option<T>,
    pub timestamp: String,
}

impl<T: Serialize> ResponseBody<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            error: false,
            message: None,
            errors: None,
            data: Some(data),
            timestamp: now(),
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::new(data)
        }
    }
}

impl ResponseBody<Value> {
    pub fn from_error(err: &Error) -> Self {
        // an error envelope always carries at least one item
        let errors = if err.errors.is_empty() {
            let kind = match err.code {
                1..=99 => "INTERNAL",
                _ => "BAD_REQUEST",
            };

            vec![ErrorItem::new(err.message.clone(), kind)]
        } else {
            err.errors.clone()
        };

        Self {
            success: false,
            error: true,
            message: Some(err.message.clone()),
            errors: Some(errors),
            data: None,
            timestamp: now(),
        }
    }
}

impl<T: Serialize> IntoResponse for ResponseBody<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
