//! New channel list panel: the reference document, verbatim.

use crate::panel::PanelResponse;
use crate::reference::document::read_paragraphs;
use log::error;
use std::path::{Path, PathBuf};

/// Document panel state.
pub struct ChannelListPanel {
    path: PathBuf,
}

impl ChannelListPanel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document and returns one line per paragraph.
    pub fn show(&self) -> PanelResponse {
        match read_paragraphs(&self.path) {
            Ok(paragraphs) => PanelResponse::info(String::new()).with_lines(paragraphs),
            Err(err) => {
                error!("event=document_panel module=panel status=error error={}", err);
                PanelResponse::error(format!("Could not load document: {err}"))
            }
        }
    }
}
