// src/cli/args.rs
use crate::constants::{DEFAULT_LIMIT, DEFAULT_SKIP};
use crate::domain::{ListQuery, NoteType};
use crate::infrastructure::AuthScheme;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// API base URL (defaults to the public Rote API)
    #[arg(long, value_name = "URL", env = "ROTE_API_BASE", global = true)]
    pub api_base: Option<String>,

    /// OpenKey used to authenticate
    #[arg(
        long,
        value_name = "KEY",
        env = "ROTE_API_KEY",
        hide_env_values = true,
        global = true
    )]
    pub api_key: Option<String>,

    /// How the key is sent to the server
    #[arg(long, value_enum, default_value_t = AuthScheme::Bearer, global = true)]
    pub auth: AuthScheme,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (create, list, or search)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a note
    Create {
        /// Note body
        #[arg(long)]
        content: String,

        /// Optional title
        #[arg(long)]
        title: Option<String>,

        /// Note type
        #[arg(long = "type", value_enum, default_value_t = NoteType::Rote)]
        note_type: NoteType,

        /// Repeatable tag
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Pin the note
        #[arg(long)]
        pin: bool,

        /// Make the note private (default)
        #[arg(long, conflicts_with = "public")]
        private: bool,

        /// Make the note public
        #[arg(long)]
        public: bool,
    },

    /// List notes
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Search notes by keyword
    Search {
        /// Keyword to search for
        #[arg(long)]
        keyword: String,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Paging and filters shared by `list` and `search`
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct FilterArgs {
    /// Number of notes to skip
    #[arg(long, default_value_t = DEFAULT_SKIP, allow_negative_numbers = true)]
    pub skip: i64,

    /// Maximum number of notes to return
    #[arg(long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    pub limit: i64,

    /// Filter by archive status ("true", any case, means archived; anything else means not)
    #[arg(long, value_name = "BOOL", value_parser = parse_archived)]
    pub archived: Option<bool>,

    /// Repeatable tag filter; notes must carry every given tag
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
}

impl From<FilterArgs> for ListQuery {
    fn from(args: FilterArgs) -> Self {
        ListQuery {
            skip: args.skip,
            limit: args.limit,
            archived: args.archived,
            tags: args.tags,
        }
    }
}

/// Case-insensitive `"true"` is true, every other value is false.
pub fn parse_archived(raw: &str) -> Result<bool, String> {
    Ok(raw.eq_ignore_ascii_case("true"))
}
