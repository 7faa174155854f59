// src/application/note_creator.rs
use crate::application::ApiTransport;
use crate::constants::NOTES_PATH;
use crate::domain::{ApiRequest, CallOutcome, CreateNoteRequest, DomainError};
use tracing::{debug, instrument};

pub struct NoteCreator<T: ApiTransport> {
    transport: T,
}

impl<T: ApiTransport> NoteCreator<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Create a note with a single `POST`.
    ///
    /// The body is serialized from the typed request, so absent fields never
    /// reach the wire.
    #[instrument(level = "debug", skip_all)]
    pub fn create_note(&mut self, note: &CreateNoteRequest) -> Result<CallOutcome, DomainError> {
        let body =
            serde_json::to_value(note).map_err(|e| DomainError::PayloadError(e.to_string()))?;
        debug!(?body, "Creating note");
        Ok(self.transport.execute(&ApiRequest::post(NOTES_PATH, body)))
    }
}
