//! Saved-list editing use-cases.
//!
//! # Responsibility
//! - Own the in-memory saved-list mapping for a session.
//! - Create/overwrite, update and delete lists, persisting after each change.
//!
//! # Invariants
//! - Create with a blank name or no members is skipped, not an error.
//! - Update and delete on an unknown name fail and change nothing.
//! - The in-memory mapping only changes after the write succeeded.
//! - Overwriting or updating a list keeps its position; deleting keeps the
//!   order of the rest.

use crate::repo::list_repo::{SavedListRepository, SavedLists};
use crate::repo::RepoError;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from saved-list use-cases.
#[derive(Debug)]
pub enum ListServiceError {
    /// No saved list has this name.
    ListNotFound(String),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ListServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListNotFound(name) => write!(f, "saved list not found: `{name}`"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ListServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::ListNotFound(_) => None,
        }
    }
}

impl From<RepoError> for ListServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Saved-list facade holding the session's mapping.
pub struct SavedListService<R: SavedListRepository> {
    repo: R,
    lists: SavedLists,
}

impl<R: SavedListRepository> SavedListService<R> {
    /// Loads the current mapping from `repo`.
    pub fn load(repo: R) -> Result<Self, ListServiceError> {
        let lists = repo.load()?;
        Ok(Self { repo, lists })
    }

    pub fn lists(&self) -> &SavedLists {
        &self.lists
    }

    /// List names in creation order.
    pub fn names(&self) -> Vec<String> {
        self.lists.keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.lists.get(name).map(Vec::as_slice)
    }

    /// Saves `members` under `name`, silently replacing an existing list.
    ///
    /// Returns `Ok(false)` without writing when `name` is blank or `members`
    /// is empty.
    pub fn create_or_overwrite(
        &mut self,
        name: &str,
        members: Vec<String>,
    ) -> Result<bool, ListServiceError> {
        if name.trim().is_empty() || members.is_empty() {
            info!("event=list_save module=service status=skipped reason=empty_input");
            return Ok(false);
        }

        let count = members.len();
        let mut next = self.lists.clone();
        let replaced = next.insert(name.to_string(), members).is_some();
        self.commit(next)?;
        info!(
            "event=list_save module=service status=ok members={} replaced={}",
            count, replaced
        );
        Ok(true)
    }

    /// Replaces the members of an existing list.
    pub fn update(&mut self, name: &str, members: Vec<String>) -> Result<(), ListServiceError> {
        if !self.lists.contains_key(name) {
            return Err(ListServiceError::ListNotFound(name.to_string()));
        }

        let count = members.len();
        let mut next = self.lists.clone();
        next.insert(name.to_string(), members);
        self.commit(next)?;
        info!(
            "event=list_update module=service status=ok members={}",
            count
        );
        Ok(())
    }

    /// Removes an existing list.
    pub fn delete(&mut self, name: &str) -> Result<(), ListServiceError> {
        let mut next = self.lists.clone();
        if next.shift_remove(name).is_none() {
            return Err(ListServiceError::ListNotFound(name.to_string()));
        }
        self.commit(next)?;
        info!(
            "event=list_delete module=service status=ok remaining={}",
            self.lists.len()
        );
        Ok(())
    }

    fn commit(&mut self, next: SavedLists) -> Result<(), ListServiceError> {
        self.repo.save(&next)?;
        self.lists = next;
        Ok(())
    }
}
