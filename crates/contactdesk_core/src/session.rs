//! In-process cache of the contact table and its tag set.
//!
//! # Responsibility
//! - Load the contact table once per session and derive its tag set.
//! - Route contact edits through [`ContactService`] and keep the cached
//!   table in step with what was written.
//!
//! # Invariants
//! - The cache is never refreshed from disk implicitly; only [`Session::reload`]
//!   re-reads the file.
//! - After an append the cached tag set is stale until [`Session::reload`].
//!   Rename and reload recompute it.

use crate::model::contact::ContactTable;
use crate::repo::contact_repo::ContactRepository;
use crate::service::contact_service::{ContactService, ContactServiceError};
use crate::tags::extract::extract_tags;
use log::info;

/// Session-scoped contact cache.
pub struct Session<R: ContactRepository> {
    service: ContactService<R>,
    table: ContactTable,
    tags: Vec<String>,
    tags_stale: bool,
}

impl<R: ContactRepository> Session<R> {
    /// Loads the contact table. A failure here is fatal for the session.
    pub fn open(repo: R) -> Result<Self, ContactServiceError> {
        let service = ContactService::new(repo);
        let table = service.load()?;
        let tags = extract_tags(table.contacts());
        info!(
            "event=session_open module=session status=ok rows={} tags={}",
            table.len(),
            tags.len()
        );
        Ok(Self {
            service,
            table,
            tags,
            tags_stale: false,
        })
    }

    pub fn table(&self) -> &ContactTable {
        &self.table
    }

    /// Cached tag set from the last load, rename or reload.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// `true` after an append, until the next reload.
    pub fn tags_stale(&self) -> bool {
        self.tags_stale
    }

    /// Re-reads the contact file and recomputes the tag set.
    pub fn reload(&mut self) -> Result<(), ContactServiceError> {
        self.table = self.service.load()?;
        self.refresh_tags();
        info!(
            "event=session_reload module=session status=ok rows={} tags={}",
            self.table.len(),
            self.tags.len()
        );
        Ok(())
    }

    /// Positional rename of every contact; see [`ContactService::rename_all`].
    pub fn rename_all(&mut self, names: Vec<String>) -> Result<(), ContactServiceError> {
        self.service.rename_all(&mut self.table, names)?;
        self.refresh_tags();
        Ok(())
    }

    /// Renames the contact at table position `index`.
    pub fn rename_one(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), ContactServiceError> {
        self.service.rename_one(&mut self.table, index, name)?;
        self.refresh_tags();
        Ok(())
    }

    /// Appends one contact; returns `false` when the input was blank.
    pub fn append(&mut self, raw_name: &str) -> Result<bool, ContactServiceError> {
        let before = self.table.len();
        self.table = self.service.append(self.table.clone(), raw_name)?;
        let appended = self.table.len() > before;
        if appended {
            self.tags_stale = true;
        }
        Ok(appended)
    }

    fn refresh_tags(&mut self) {
        self.tags = extract_tags(self.table.contacts());
        self.tags_stale = false;
    }
}
