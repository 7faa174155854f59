// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Missing ROTE_API_KEY env var")]
    MissingApiKey,
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidApiBase { url: String, reason: String },
    #[error("Payload error: {0}")]
    PayloadError(String),
}

/// Failures below the HTTP layer: nothing usable came back from the server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Could not build request: {0}")]
    InvalidRequest(String),
    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("Response body is not valid UTF-8: {0}")]
    InvalidEncoding(String),
    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(String),
}
