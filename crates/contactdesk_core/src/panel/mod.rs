//! Presentation-independent panels.
//!
//! # Responsibility
//! - Compose the stores and services into three independent panels.
//! - Turn each operator action into one synchronous response value.
//!
//! # Invariants
//! - Handlers never panic; failures come back as responses.
//! - A failing reference panel never affects the contact manager.

use crate::config::DeskConfig;
use crate::repo::contact_repo::CsvContactRepository;
use crate::repo::list_repo::JsonSavedListRepository;
use crate::service::contact_service::ContactServiceError;
use crate::service::list_service::ListServiceError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod channel_list;
pub mod channel_matrix;
pub mod contact_manager;

use channel_list::ChannelListPanel;
use channel_matrix::ChannelMatrixPanel;
use contact_manager::ContactManager;

/// Severity of a panel response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl Display for MessageLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Success => f.write_str("success"),
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Outcome of one panel action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelResponse {
    /// Severity of `message`.
    pub level: MessageLevel,
    /// One-line operator message; may be empty for plain listings.
    pub message: String,
    /// Rendered body lines (listings, partitions, paragraphs).
    pub lines: Vec<String>,
}

impl PanelResponse {
    fn new(level: MessageLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            lines: Vec::new(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, message)
    }

    pub fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.lines = lines;
        self
    }

    /// `false` only when the action was rejected or failed.
    pub fn is_ok(&self) -> bool {
        self.level != MessageLevel::Error
    }
}

/// Fatal start-up failure: the mutable stores could not be loaded.
#[derive(Debug)]
pub enum DeskError {
    Contacts(ContactServiceError),
    Lists(ListServiceError),
}

impl Display for DeskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contacts(err) => write!(f, "failed to load contacts: {err}"),
            Self::Lists(err) => write!(f, "failed to load saved lists: {err}"),
        }
    }
}

impl Error for DeskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Contacts(err) => Some(err),
            Self::Lists(err) => Some(err),
        }
    }
}

impl From<ContactServiceError> for DeskError {
    fn from(value: ContactServiceError) -> Self {
        Self::Contacts(value)
    }
}

impl From<ListServiceError> for DeskError {
    fn from(value: ListServiceError) -> Self {
        Self::Lists(value)
    }
}

/// The three panels of one desk session.
pub struct Desk {
    pub contacts: ContactManager<CsvContactRepository, JsonSavedListRepository>,
    pub matrix: ChannelMatrixPanel,
    pub channel_list: ChannelListPanel,
}

impl Desk {
    /// Opens every panel for `config`.
    ///
    /// Only the contact manager can fail here; reference panels read their
    /// files lazily on each action.
    pub fn open(config: &DeskConfig) -> Result<Self, DeskError> {
        let contacts = ContactManager::open(
            CsvContactRepository::new(config.contacts_path()),
            JsonSavedListRepository::new(config.lists_path()),
        )?;
        Ok(Self {
            contacts,
            matrix: ChannelMatrixPanel::new(config.matrix_path()),
            channel_list: ChannelListPanel::new(config.document_path()),
        })
    }
}
