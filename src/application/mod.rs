// src/application/mod.rs
pub mod note_creator;
pub mod note_lister;
pub mod note_searcher;
pub mod transport;

pub use note_creator::NoteCreator;
pub use note_lister::NoteLister;
pub use note_searcher::NoteSearcher;
pub use transport::ApiTransport;
