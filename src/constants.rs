// src/constants.rs
//
// Application-wide constants for the OpenKey API surface.

/// Public hosted API, used when no base URL is configured.
///
/// Self-hosted deployments override it via `--api-base` or `ROTE_API_BASE`.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_API_BASE: &str = "https://api.rote.ink/v2/api";

/// Fixed timeout in seconds for the single request a command issues.
///
/// Covers connect, send and reading the full response body. There is no retry
/// after it fires.
///
/// Used in: `infrastructure/openkey.rs`
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Endpoint for creating a note (`POST`).
pub const NOTES_PATH: &str = "/openkey/notes";

/// Endpoint for listing notes (`GET`). Same path as creation.
pub const LIST_NOTES_PATH: &str = NOTES_PATH;

/// Endpoint for keyword search (`GET`).
pub const SEARCH_NOTES_PATH: &str = "/openkey/notes/search";

/// Query parameter and body field carrying the key under the `openkey` auth scheme.
pub const OPENKEY_PARAM: &str = "openkey";

/// Default number of notes to skip when paging.
pub const DEFAULT_SKIP: i64 = 0;

/// Default page size for list and search.
pub const DEFAULT_LIMIT: i64 = 20;
