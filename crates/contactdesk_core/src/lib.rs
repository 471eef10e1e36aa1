//! Core logic for the contact desk.
//! This crate owns every data rule; presentation layers only map input to
//! panel actions and print panel responses.

pub mod config;
pub mod logging;
pub mod model;
pub mod panel;
pub mod reference;
pub mod repo;
pub mod service;
pub mod session;
pub mod tags;

pub use config::{ConfigError, DeskConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::{Contact, ContactTable, CHECKBOX_COLUMN, DISPLAY_NAME_COLUMN};
pub use panel::channel_list::ChannelListPanel;
pub use panel::channel_matrix::{ChannelMatrixPanel, MatrixAction};
pub use panel::contact_manager::{ContactAction, ContactManager, MemberRef};
pub use panel::{Desk, DeskError, MessageLevel, PanelResponse};
pub use reference::document::{read_paragraphs, DocumentError};
pub use reference::matrix::{load_matrix, ChannelMatrix, MatrixError, MatrixPartition};
pub use repo::contact_repo::{ContactRepository, CsvContactRepository};
pub use repo::list_repo::{JsonSavedListRepository, SavedListRepository, SavedLists};
pub use repo::{RepoError, RepoResult};
pub use service::contact_service::{ContactService, ContactServiceError};
pub use service::list_service::{ListServiceError, SavedListService};
pub use session::Session;
pub use tags::extract::{contact_tags, extract_tags, normalize_tag};
pub use tags::filter::{contact_matches, filter_contacts, FilterMode};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
