//! Contact editing and appending use-cases.
//!
//! # Responsibility
//! - Positional rename of every display name, then a full write.
//! - Append one contact from raw operator input, then a full write.
//!
//! # Invariants
//! - Blank append input performs no write and returns the table unchanged.
//! - Appended rows go to the end; existing order is never changed.
//! - A rename with a mismatched name count writes nothing.

use crate::model::contact::ContactTable;
use crate::repo::contact_repo::ContactRepository;
use crate::repo::RepoError;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from contact use-cases.
#[derive(Debug)]
pub enum ContactServiceError {
    /// Rename input does not line up with the table.
    LengthMismatch { expected: usize, actual: usize },
    /// Row index is outside the table.
    IndexOutOfRange { index: usize, len: usize },
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ContactServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "expected {expected} display names, got {actual}; nothing was saved"
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "contact #{index} does not exist (table has {len} rows)")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ContactServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ContactServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Contact use-case facade over a contact store.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the full table from the store.
    pub fn load(&self) -> Result<ContactTable, ContactServiceError> {
        Ok(self.repo.load()?)
    }

    /// Replaces every display name positionally and persists the table.
    ///
    /// Names are taken as given; empty or duplicate names are allowed.
    pub fn rename_all(
        &self,
        table: &mut ContactTable,
        new_display_names: Vec<String>,
    ) -> Result<(), ContactServiceError> {
        if new_display_names.len() != table.len() {
            return Err(ContactServiceError::LengthMismatch {
                expected: table.len(),
                actual: new_display_names.len(),
            });
        }

        let mut renamed = table.clone();
        let mut changed = 0usize;
        for (contact, name) in renamed.contacts_mut().iter_mut().zip(new_display_names) {
            if contact.display_name != name {
                changed += 1;
            }
            contact.display_name = name;
        }

        self.repo.save(&renamed)?;
        *table = renamed;
        info!(
            "event=contacts_rename module=service status=ok rows={} changed={}",
            table.len(),
            changed
        );
        Ok(())
    }

    /// Renames one row, keeping every other name, and persists the table.
    pub fn rename_one(
        &self,
        table: &mut ContactTable,
        index: usize,
        new_display_name: impl Into<String>,
    ) -> Result<(), ContactServiceError> {
        if index >= table.len() {
            return Err(ContactServiceError::IndexOutOfRange {
                index,
                len: table.len(),
            });
        }
        let mut names = table.display_names();
        names[index] = new_display_name.into();
        self.rename_all(table, names)
    }

    /// Appends a contact built from `raw_name` and persists the table.
    ///
    /// Blank input returns `table` untouched without a write. The caller is
    /// responsible for refreshing cached tag views.
    pub fn append(
        &self,
        table: ContactTable,
        raw_name: &str,
    ) -> Result<ContactTable, ContactServiceError> {
        if raw_name.trim().is_empty() {
            info!("event=contacts_append module=service status=skipped reason=blank_input");
            return Ok(table);
        }

        let mut extended = table;
        let contact = extended.blank_contact(raw_name);
        extended.push(contact);
        self.repo.save(&extended)?;
        info!(
            "event=contacts_append module=service status=ok rows={}",
            extended.len()
        );
        Ok(extended)
    }
}
