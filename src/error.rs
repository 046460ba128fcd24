use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::contract::{ErrorItem, ResponseBody};

/// Codes 1..=99 are internal faults (transport, contract violations) and are
/// redacted when served; codes from 100 up are application outcomes the
/// backend reports through the envelope.
#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
    pub errors: Vec<ErrorItem>,
}

impl Error {
    pub fn is_contract_error(&self) -> bool {
        matches!(self.code, 10 | 11)
    }

    pub fn is_application_error(&self) -> bool {
        self.code == 100
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, served) = match self.code {
            1..=99 => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Error {
                    code: self.code,
                    message: "internal server error".into(),
                    errors: vec![],
                },
            ),
            _ => (StatusCode::BAD_REQUEST, self),
        };

        let body = Json(ResponseBody::from_error(&served));

        (status, body).into_response()
    }
}

pub fn reqwest_error(_: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: "transport error".into(),
        errors: vec![],
    }
}

pub fn malformed_envelope_error(detail: &str) -> Error {
    Error {
        code: 10,
        message: format!("malformed envelope: {}", detail),
        errors: vec![],
    }
}

pub fn payload_mismatch_error(detail: &str) -> Error {
    Error {
        code: 11,
        message: format!("payload mismatch: {}", detail),
        errors: vec![],
    }
}

pub fn backend_error(message: String, errors: Vec<ErrorItem>) -> Error {
    Error {
        code: 100,
        message,
        errors,
    }
}
