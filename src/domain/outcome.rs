// src/domain/outcome.rs
use serde_json::{json, Value};

use super::TransportError;

/// A non-2xx response, kept as data rather than treated as a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiErrorRecord {
    pub http_status: u16,
    /// Parsed JSON body, or the raw text when the body is not JSON.
    pub error: Value,
}

impl ApiErrorRecord {
    pub fn to_value(&self) -> Value {
        json!({
            "httpStatus": self.http_status,
            "error": self.error,
        })
    }
}

/// Result of exactly one round-trip to the API.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    /// 2xx response: the parsed body, or `{}` when the body was empty.
    Payload(Value),
    ApiError(ApiErrorRecord),
    Failed(TransportError),
}

impl CallOutcome {
    /// The JSON document to print. Payloads pass through unchanged and API
    /// errors become `{"httpStatus": .., "error": ..}`.
    pub fn into_document(self) -> Result<Value, TransportError> {
        match self {
            CallOutcome::Payload(value) => Ok(value),
            CallOutcome::ApiError(record) => Ok(record.to_value()),
            CallOutcome::Failed(err) => Err(err),
        }
    }
}
