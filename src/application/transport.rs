// src/application/transport.rs
use crate::domain::{ApiRequest, CallOutcome};

/// Executes one request against the API and normalizes whatever comes back.
///
/// Implementations perform exactly one round-trip per call and never retry.
pub trait ApiTransport {
    fn execute(&mut self, request: &ApiRequest) -> CallOutcome;
}

impl<T: ApiTransport + ?Sized> ApiTransport for &mut T {
    fn execute(&mut self, request: &ApiRequest) -> CallOutcome {
        (**self).execute(request)
    }
}
