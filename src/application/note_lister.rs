// src/application/note_lister.rs
use crate::application::ApiTransport;
use crate::constants::LIST_NOTES_PATH;
use crate::domain::{ApiRequest, CallOutcome, ListQuery};
use tracing::debug;

pub struct NoteLister<T: ApiTransport> {
    transport: T,
}

impl<T: ApiTransport> NoteLister<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// List notes, passing paging and filters through as query parameters
    pub fn list_notes(&mut self, query: &ListQuery) -> CallOutcome {
        debug!(?query, "Listing notes");
        self.transport
            .execute(&ApiRequest::get(LIST_NOTES_PATH, query.to_pairs()))
    }
}
