//! File-backed stores for contacts and saved lists.
//!
//! # Responsibility
//! - Define load/save contracts for the two mutable data files.
//! - Keep file formats (CSV, JSON, text encoding) inside this boundary.
//!
//! # Invariants
//! - Saves overwrite the backing file wholesale; there are no partial writes.
//! - A save that fails while encoding leaves the backing file untouched.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod contact_repo;
pub mod list_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Store-level failure shared by the contact and saved-list stores.
#[derive(Debug)]
pub enum RepoError {
    /// Reading or writing the backing file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Delimited text could not be parsed or produced.
    Csv(csv::Error),
    /// Saved-list document could not be parsed or produced.
    Json(serde_json::Error),
    /// A required header is absent from the contact file.
    MissingColumn(&'static str),
    /// Row shape or value does not fit the file layout.
    InvalidData(String),
    /// Text contains a character outside ISO-8859-1.
    Unencodable(char),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Csv(err) => write!(f, "malformed contact file: {err}"),
            Self::Json(err) => write!(f, "malformed saved-lists file: {err}"),
            Self::MissingColumn(column) => {
                write!(f, "contact file has no `{column}` column")
            }
            Self::InvalidData(message) => write!(f, "invalid contact data: {message}"),
            Self::Unencodable(character) => write!(
                f,
                "character {character:?} (U+{:04X}) cannot be stored as ISO-8859-1",
                u32::from(*character)
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::MissingColumn(_) | Self::InvalidData(_) | Self::Unencodable(_) => None,
        }
    }
}

impl From<csv::Error> for RepoError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
