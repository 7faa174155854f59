// src/infrastructure/openkey.rs
use crate::application::ApiTransport;
use crate::constants::{OPENKEY_PARAM, REQUEST_TIMEOUT_SECS};
use crate::domain::{ApiErrorRecord, ApiRequest, CallOutcome, HttpMethod, TransportError};
use crate::infrastructure::config::{AuthScheme, ClientConfig};
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde_json::{json, Value};
use std::error::Error as _;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Blocking client for the OpenKey endpoints.
///
/// Every call is one HTTP round-trip bounded by a fixed timeout. Non-2xx
/// responses are returned as data, never retried.
pub struct OpenKeyClient {
    config: ClientConfig,
    http: Client,
}

impl OpenKeyClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        debug!(?config, "Created OpenKey client");
        Ok(Self { config, http })
    }

    /// Base + path, then the query pairs in order. Under the `openkey` scheme
    /// the key is appended as one more pair unless the caller already set it.
    pub fn build_url(&self, request: &ApiRequest) -> Result<Url, TransportError> {
        let mut pairs = request.query.clone();
        if self.config.auth == AuthScheme::Openkey && !pairs.iter().any(|(k, _)| k == OPENKEY_PARAM)
        {
            pairs.push((OPENKEY_PARAM.to_string(), self.config.api_key.clone()));
        }

        let raw = self.endpoint(request);
        let url = if pairs.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, &pairs)
        };
        url.map_err(|e| TransportError::InvalidRequest(format!("{}: {}", raw, e)))
    }

    /// UTF-8 JSON for the request body, with the key injected under the
    /// `openkey` scheme.
    pub fn encode_body(&self, body: &Value) -> Result<Vec<u8>, TransportError> {
        let encoded = match (self.config.auth, body) {
            (AuthScheme::Openkey, Value::Object(fields)) => {
                let mut fields = fields.clone();
                fields.insert(
                    OPENKEY_PARAM.to_string(),
                    Value::String(self.config.api_key.clone()),
                );
                serde_json::to_vec(&fields)
            }
            _ => serde_json::to_vec(body),
        };
        encoded.map_err(|e| TransportError::InvalidRequest(e.to_string()))
    }

    /// Endpoint without the query string, safe to log
    fn endpoint(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.config.api_base, request.path)
    }

    fn send(&self, request: &ApiRequest) -> Result<CallOutcome, TransportError> {
        let url = self.build_url(request)?;
        let endpoint = self.endpoint(request);

        let mut builder = self
            .http
            .request(to_reqwest_method(request.method), url)
            .header(ACCEPT, "application/json");

        if self.config.auth == AuthScheme::Bearer {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", self.config.api_key));
        }

        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(self.encode_body(body)?);
        }

        let response = builder.send().map_err(|e| TransportError::Network {
            url: endpoint.clone(),
            message: describe(e),
        })?;

        let status = response.status();
        let bytes = response.bytes().map_err(|e| TransportError::Network {
            url: endpoint,
            message: describe(e),
        })?;

        info!(
            status = status.as_u16(),
            bytes = bytes.len(),
            "Received response"
        );
        Ok(normalize_response(status, &bytes))
    }
}

impl ApiTransport for OpenKeyClient {
    #[instrument(level = "debug", skip(self, request), fields(method = request.method.as_str(), path = request.path))]
    fn execute(&mut self, request: &ApiRequest) -> CallOutcome {
        match self.send(request) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(%err, "Request failed");
                CallOutcome::Failed(err)
            }
        }
    }
}

/// Turn a received response into a [`CallOutcome`].
///
/// - 2xx with an empty body: `{}`
/// - 2xx otherwise: the parsed JSON; a body that is not UTF-8 JSON is a failure
/// - anything else: an [`ApiErrorRecord`] holding the parsed JSON body, or the
///   raw text (invalid UTF-8 replaced) when it does not parse
pub fn normalize_response(status: StatusCode, body: &[u8]) -> CallOutcome {
    if !status.is_success() {
        let text = String::from_utf8_lossy(body);
        let error = serde_json::from_str::<Value>(&text)
            .unwrap_or_else(|_| Value::String(text.into_owned()));
        debug!(status = status.as_u16(), "API returned error status");
        return CallOutcome::ApiError(ApiErrorRecord {
            http_status: status.as_u16(),
            error,
        });
    }

    let text = match std::str::from_utf8(body) {
        Ok(text) => text,
        Err(e) => return CallOutcome::Failed(TransportError::InvalidEncoding(e.to_string())),
    };
    if text.is_empty() {
        return CallOutcome::Payload(json!({}));
    }
    match serde_json::from_str(text) {
        Ok(value) => CallOutcome::Payload(value),
        Err(e) => CallOutcome::Failed(TransportError::InvalidJson(e.to_string())),
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
    }
}

/// Flatten a reqwest error and its causes into one line. The URL is dropped
/// because it may carry the key as a query parameter.
fn describe(err: reqwest::Error) -> String {
    let timed_out = err.is_timeout();
    let err = err.without_url();
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    if timed_out {
        message.push_str(&format!(" (timed out after {}s)", REQUEST_TIMEOUT_SECS));
    }
    message
}
