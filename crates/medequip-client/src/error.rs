//! Client error types
//!
//! Network-origin failures ([`ApiError`]) and client-side form validation
//! failures ([`FormError`]) are kept apart: the latter never reach the wire.

use serde_json::Value;
use thiserror::Error;

/// Failure of a REST call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response (connection refused, CORS, DNS...)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered 404
    #[error("Not found{}", fmt_detail(.detail))]
    NotFound { detail: Option<String> },

    /// Server answered any other non-2xx status
    #[error("Request rejected with status {status}{}", fmt_detail(.detail))]
    Rejected { status: u16, detail: Option<String> },

    /// 2xx response whose body does not match the model
    #[error("Invalid response: {0}")]
    Decode(String),
}

fn fmt_detail(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {}", d)).unwrap_or_default()
}

impl ApiError {
    /// Build the error for a non-2xx response from its status and raw body
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = extract_detail(body);
        if status == 404 {
            ApiError::NotFound { detail }
        } else {
            ApiError::Rejected { status, detail }
        }
    }

    /// Server-provided `detail` message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { detail } | ApiError::Rejected { detail, .. } => detail.as_deref(),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(404),
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Message to show the user: the server detail, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Pull `detail` out of an error body.
///
/// Accepts `{"detail": "text"}` and the validation form
/// `{"detail": [{"msg": "..."}, ...]}`; anything else yields `None`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|e| e.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

/// Client-side validation failure; the request is never sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0}")]
    Invalid(String),

    /// Submit pressed with no modal open
    #[error("No form is open")]
    NoForm,
}

impl FormError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        FormError::Invalid(msg.into())
    }
}

/// Result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;
