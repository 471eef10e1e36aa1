//! Runtime configuration resolved once at startup.
//!
//! Paths are fixed when the session starts and passed into panels and
//! services; nothing reads the environment while handling an action.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const CONTACT_FILE_NAME: &str = "contacts.csv";
pub const LISTS_FILE_NAME: &str = "saved_lists.json";
pub const MATRIX_FILE_NAME: &str = "channel_matrix.xlsx";
pub const DOCUMENT_FILE_NAME: &str = "CHANNELS LIST.docx";
pub const LOG_DIR_NAME: &str = "logs";

/// Invalid configuration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Data directory argument is blank.
    EmptyDataDir,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDataDir => write!(f, "data directory cannot be empty"),
        }
    }
}

impl Error for ConfigError {}

/// File locations for one desk session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeskConfig {
    data_dir: PathBuf,
    contacts_path: PathBuf,
    lists_path: PathBuf,
    matrix_path: PathBuf,
    document_path: PathBuf,
}

impl DeskConfig {
    /// Uses the default file names inside `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let data_dir = data_dir.into();
        if data_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }
        Ok(Self {
            contacts_path: data_dir.join(CONTACT_FILE_NAME),
            lists_path: data_dir.join(LISTS_FILE_NAME),
            matrix_path: data_dir.join(MATRIX_FILE_NAME),
            document_path: data_dir.join(DOCUMENT_FILE_NAME),
            data_dir,
        })
    }

    pub fn with_contacts_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.contacts_path = path.into();
        self
    }

    pub fn with_lists_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lists_path = path.into();
        self
    }

    pub fn with_matrix_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.matrix_path = path.into();
        self
    }

    pub fn with_document_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.document_path = path.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn contacts_path(&self) -> &Path {
        &self.contacts_path
    }

    pub fn lists_path(&self) -> &Path {
        &self.lists_path
    }

    pub fn matrix_path(&self) -> &Path {
        &self.matrix_path
    }

    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    /// Default log directory: `logs/` under the data directory.
    pub fn default_log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}
