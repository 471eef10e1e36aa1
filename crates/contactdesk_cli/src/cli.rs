//! Command-line grammar shared by one-shot runs and the interactive shell.

use clap::{Parser, Subcommand, ValueEnum};
use contactdesk_core::FilterMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "contactdesk",
    author,
    version = contactdesk_core::core_version(),
    about = "Manage a tagged contact list, saved contact lists and channel references."
)]
pub struct Cli {
    /// Directory holding contacts.csv, saved_lists.json and the reference files.
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Contact file (defaults to <DATA_DIR>/contacts.csv).
    #[arg(long, global = true, value_name = "PATH")]
    pub contacts: Option<PathBuf>,

    /// Saved-lists file (defaults to <DATA_DIR>/saved_lists.json).
    #[arg(long, global = true, value_name = "PATH")]
    pub lists: Option<PathBuf>,

    /// Channel matrix workbook (defaults to <DATA_DIR>/channel_matrix.xlsx).
    #[arg(long, global = true, value_name = "PATH")]
    pub matrix: Option<PathBuf>,

    /// Channel list document (defaults to "<DATA_DIR>/CHANNELS LIST.docx").
    #[arg(long, global = true, value_name = "PATH")]
    pub document: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Log directory (defaults to <DATA_DIR>/logs).
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(flatten)]
    Panel(PanelCommand),
    /// Start an interactive session; the contact cache lives until exit.
    Shell,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PanelCommand {
    /// Show every tag found in display names.
    Tags,
    /// Filter contacts by tags (no tags clears the filter).
    Filter {
        /// Tags to match, with or without the leading '+'.
        #[arg(value_name = "TAG")]
        tags: Vec<String>,
        /// Require all tags or any tag.
        #[arg(long, value_enum, default_value_t = ModeArg::All)]
        mode: ModeArg,
    },
    /// Show and edit contacts.
    #[command(subcommand)]
    Contacts(ContactsCommand),
    /// Show and edit saved lists.
    #[command(subcommand)]
    Lists(ListsCommand),
    /// Split operators by their answer for one charterer.
    Matrix {
        /// Charterer column label (defaults to the first charterer).
        charterer: Option<String>,
        /// List the charterer columns instead.
        #[arg(long, conflicts_with = "charterer")]
        charterers: bool,
    },
    /// Print the channel list document.
    Doc,
    /// Re-read the contact file and refresh the tag list.
    Reload,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ContactsCommand {
    /// List contacts of the current view with their row numbers.
    Show,
    /// Rename the contact at ROW.
    Rename {
        row: usize,
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    /// Replace every display name from FILE, one name per line, in row order.
    RenameAll { file: PathBuf },
    /// Add a contact; tags may be embedded, e.g. "Jane Doe +vip".
    Add {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ListsCommand {
    /// List saved list names with member counts.
    Names,
    /// Show the members of one list.
    Show { name: String },
    /// Save a list (overwrites an existing one). Members are `#ROW` or display names.
    Save {
        name: String,
        #[arg(value_name = "MEMBER")]
        members: Vec<String>,
    },
    /// Replace the members of an existing list.
    Update {
        name: String,
        #[arg(value_name = "MEMBER")]
        members: Vec<String>,
    },
    /// Delete an existing list.
    Delete { name: String },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ModeArg {
    #[value(alias = "and")]
    All,
    #[value(alias = "or")]
    Any,
}

impl From<ModeArg> for FilterMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::All => FilterMode::All,
            ModeArg::Any => FilterMode::Any,
        }
    }
}

/// Grammar of one interactive shell line.
#[derive(Parser, Debug)]
#[command(name = "contactdesk", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: PanelCommand,
}
