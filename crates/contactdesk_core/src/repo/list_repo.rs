//! Saved-list store over a JSON object-of-arrays file.
//!
//! # Responsibility
//! - Load the name -> members mapping, treating a missing file as empty.
//! - Write the mapping back as indented JSON.
//!
//! # Invariants
//! - Lists keep creation order on disk and in memory, so `save(load())`
//!   reproduces the same file.
//! - Members are stored as given; they are not checked against contacts.

use crate::repo::{RepoError, RepoResult};
use indexmap::IndexMap;
use log::{error, info};
use std::path::{Path, PathBuf};

/// List name -> ordered display names, in creation order.
pub type SavedLists = IndexMap<String, Vec<String>>;

/// Load/save contract for saved lists.
pub trait SavedListRepository {
    /// Reads every saved list; an absent store yields an empty mapping.
    fn load(&self) -> RepoResult<SavedLists>;
    /// Overwrites the backing store with `lists`.
    fn save(&self, lists: &SavedLists) -> RepoResult<()>;
}

/// JSON-file saved-list store.
#[derive(Debug, Clone)]
pub struct JsonSavedListRepository {
    path: PathBuf,
}

impl JsonSavedListRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> RepoError {
        RepoError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SavedListRepository for JsonSavedListRepository {
    fn load(&self) -> RepoResult<SavedLists> {
        if !self.path.exists() {
            info!("event=lists_load module=repo status=skipped reason=first_run");
            return Ok(SavedLists::new());
        }

        let text = std::fs::read_to_string(&self.path).map_err(|err| self.io_error(err))?;
        let lists: SavedLists = serde_json::from_str(&text).map_err(|err| {
            error!(
                "event=lists_load module=repo status=error path={} error={}",
                self.path.display(),
                err
            );
            RepoError::from(err)
        })?;
        info!(
            "event=lists_load module=repo status=ok lists={}",
            lists.len()
        );
        Ok(lists)
    }

    fn save(&self, lists: &SavedLists) -> RepoResult<()> {
        let text = serde_json::to_string_pretty(lists)?;
        std::fs::write(&self.path, text).map_err(|err| {
            error!(
                "event=lists_save module=repo status=error path={} error={}",
                self.path.display(),
                err
            );
            self.io_error(err)
        })?;
        info!(
            "event=lists_save module=repo status=ok lists={}",
            lists.len()
        );
        Ok(())
    }
}
