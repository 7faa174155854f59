// src/domain/mod.rs
pub mod error;
pub mod note;
pub mod outcome;
pub mod query;
pub mod request;

pub use error::{DomainError, TransportError};
pub use note::{CreateNoteRequest, NoteState, NoteType};
pub use outcome::{ApiErrorRecord, CallOutcome};
pub use query::{ListQuery, SearchQuery};
pub use request::{ApiRequest, HttpMethod};
