// src/util/testing.rs

use anyhow::Result;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::ApiTransport;
use crate::domain::{ApiRequest, CallOutcome};

/// Shared transport double for testing use cases that depend on ApiTransport
///
/// Replays configured outcomes in order and records every request it is
/// asked to execute. Once the configured outcomes run out it answers with an
/// empty payload (`{}`), like a 2xx response with no body.
///
/// # Examples
///
/// ```
/// use rote::util::testing::MockTransport;
/// use serde_json::json;
///
/// let mock = MockTransport::builder()
///     .with_payload(json!({"code": 0, "data": []}))
///     .build();
/// assert!(mock.requests().is_empty());
/// ```
pub struct MockTransport {
    outcomes: VecDeque<CallOutcome>,
    requests: Vec<ApiRequest>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder::new()
    }

    /// Requests seen so far, in call order
    pub fn requests(&self) -> &[ApiRequest] {
        &self.requests
    }
}

impl ApiTransport for MockTransport {
    fn execute(&mut self, request: &ApiRequest) -> CallOutcome {
        self.requests.push(request.clone());
        self.outcomes
            .pop_front()
            .unwrap_or_else(|| CallOutcome::Payload(json!({})))
    }
}

/// Builder for MockTransport
pub struct MockTransportBuilder {
    outcomes: VecDeque<CallOutcome>,
}

impl MockTransportBuilder {
    pub fn new() -> Self {
        Self {
            outcomes: VecDeque::new(),
        }
    }

    /// Queue an arbitrary outcome for the next unanswered call
    pub fn with_outcome(mut self, outcome: CallOutcome) -> Self {
        self.outcomes.push_back(outcome);
        self
    }

    /// Queue a successful response body
    pub fn with_payload(self, payload: Value) -> Self {
        self.with_outcome(CallOutcome::Payload(payload))
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            outcomes: self.outcomes,
            requests: vec![],
        }
    }
}

impl Default for MockTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "rustls", "mio", "tiny_http"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
