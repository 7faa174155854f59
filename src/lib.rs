// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::Result;
use application::{ApiTransport, NoteCreator, NoteLister, NoteSearcher};
use cli::args::{Args, Command};
use domain::{CallOutcome, CreateNoteRequest, NoteState, SearchQuery};
use infrastructure::{ClientConfig, OpenKeyClient};
use ports::JsonPresenter;
use serde_json::Value;
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(command = ?args.command, auth = ?args.auth, "Starting rote");

    // Configuration is resolved once, before any network activity
    let config = ClientConfig::resolve(args.api_base.as_deref(), args.api_key.as_deref(), args.auth)?;
    let client = OpenKeyClient::new(config)?;

    let document = execute(client, args.command)?;

    let presenter = JsonPresenter::new();
    presenter.write_to(&document, &mut std::io::stdout().lock())?;
    Ok(())
}

/// Run one command against the given transport and return the document to print.
///
/// API errors are part of the document; only transport failures become `Err`.
pub fn execute<T: ApiTransport>(transport: T, command: Command) -> Result<Value> {
    let outcome = dispatch(transport, command)?;
    if let CallOutcome::ApiError(record) = &outcome {
        info!(http_status = record.http_status, "Server answered with an error status");
    }
    Ok(outcome.into_document()?)
}

fn dispatch<T: ApiTransport>(transport: T, command: Command) -> Result<CallOutcome> {
    let outcome = match command {
        Command::Create {
            content,
            title,
            note_type,
            tags,
            pin,
            private,
            public,
        } => {
            let note = CreateNoteRequest::new(content)
                .with_title(title)
                .with_state(NoteState::from_flags(private, public))
                .with_type(note_type)
                .with_tags(tags)
                .with_pin(pin);
            NoteCreator::new(transport).create_note(&note)?
        }
        Command::List { filter } => NoteLister::new(transport).list_notes(&filter.into()),
        Command::Search { keyword, filter } => {
            NoteSearcher::new(transport).search_notes(&SearchQuery::new(keyword, filter.into()))
        }
    };
    Ok(outcome)
}
