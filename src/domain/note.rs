// src/domain/note.rs
use clap::ValueEnum;
use serde::Serialize;

/// Visibility of a note on the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteState {
    #[default]
    Private,
    Public,
}

impl NoteState {
    /// Derive the state from the mutually exclusive `--private` / `--public` flags.
    /// Neither flag means private.
    pub fn from_flags(private: bool, public: bool) -> Self {
        if public && !private {
            NoteState::Public
        } else {
            NoteState::Private
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    #[default]
    Rote,
    Article,
    Other,
}

/// Body of `POST /openkey/notes`.
///
/// Field order is the wire order. Absent optional fields are omitted from the
/// JSON entirely; present-but-falsy values (`false`, `[]`) are always sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateNoteRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub state: NoteState,
    #[serde(rename = "type")]
    pub note_type: NoteType,
    pub tags: Vec<String>,
    pub pin: bool,
}

impl CreateNoteRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            title: None,
            state: NoteState::default(),
            note_type: NoteType::default(),
            tags: vec![],
            pin: false,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_state(mut self, state: NoteState) -> Self {
        self.state = state;
        self
    }

    pub fn with_type(mut self, note_type: NoteType) -> Self {
        self.note_type = note_type;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_pin(mut self, pin: bool) -> Self {
        self.pin = pin;
        self
    }
}
