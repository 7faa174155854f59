// src/application/note_searcher.rs
use crate::application::ApiTransport;
use crate::constants::SEARCH_NOTES_PATH;
use crate::domain::{ApiRequest, CallOutcome, SearchQuery};
use tracing::debug;

pub struct NoteSearcher<T: ApiTransport> {
    transport: T,
}

impl<T: ApiTransport> NoteSearcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn search_notes(&mut self, query: &SearchQuery) -> CallOutcome {
        debug!(keyword = %query.keyword, "Searching notes");
        self.transport
            .execute(&ApiRequest::get(SEARCH_NOTES_PATH, query.to_pairs()))
    }
}
