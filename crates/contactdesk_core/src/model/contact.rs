//! Contact record and contact table.
//!
//! # Responsibility
//! - Hold the in-memory shape of the contact file.
//! - Provide default construction for appended rows.
//!
//! # Invariants
//! - `columns` always contains [`DISPLAY_NAME_COLUMN`] and
//!   [`CHECKBOX_COLUMN`] once a table is loaded or built with [`ContactTable::new`].
//! - Attribute keys never include the two reserved columns.
//! - Duplicate display names are allowed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Required column holding the free-text name with embedded tags.
pub const DISPLAY_NAME_COLUMN: &str = "display_name";
/// Optional selection marker column, synthesized when missing.
pub const CHECKBOX_COLUMN: &str = "checkbox";

/// One row of the contact file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contact {
    /// Free text, may embed zero or more `+tag` tokens.
    pub display_name: String,
    /// Transient UI selection marker.
    pub selected: bool,
    /// Every other column of the file, keyed by header label.
    pub attributes: BTreeMap<String, String>,
}

impl Contact {
    /// Creates a contact with no selection and no extra attributes.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            selected: false,
            attributes: BTreeMap::new(),
        }
    }

    /// Returns the value of an extra column, if present.
    pub fn attribute(&self, column: &str) -> Option<&str> {
        self.attributes.get(column).map(String::as_str)
    }
}

/// Ordered contacts plus the column layout of the backing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactTable {
    columns: Vec<String>,
    contacts: Vec<Contact>,
}

impl ContactTable {
    /// Builds a table from header labels and rows.
    ///
    /// Missing reserved columns are appended to the layout: the display name
    /// column first, then the checkbox column.
    pub fn new(columns: Vec<String>, contacts: Vec<Contact>) -> Self {
        let mut columns = columns;
        if !columns.iter().any(|column| column == DISPLAY_NAME_COLUMN) {
            columns.insert(0, DISPLAY_NAME_COLUMN.to_string());
        }
        if !columns.iter().any(|column| column == CHECKBOX_COLUMN) {
            columns.push(CHECKBOX_COLUMN.to_string());
        }
        Self { columns, contacts }
    }

    /// Header labels in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Columns other than the reserved two, in file order.
    pub fn attribute_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|column| *column != DISPLAY_NAME_COLUMN && *column != CHECKBOX_COLUMN)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contacts_mut(&mut self) -> &mut [Contact] {
        &mut self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Display names in table order.
    pub fn display_names(&self) -> Vec<String> {
        self.contacts
            .iter()
            .map(|contact| contact.display_name.clone())
            .collect()
    }

    /// Builds a new row for this layout: every extra column set to "".
    pub fn blank_contact(&self, display_name: impl Into<String>) -> Contact {
        let mut contact = Contact::new(display_name);
        for column in self.attribute_columns() {
            contact.attributes.insert(column.to_string(), String::new());
        }
        contact
    }

    /// Appends one contact at the end.
    pub fn push(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }
}
