//! Tag filter over contact sequences.
//!
//! # Invariants
//! - An empty selection returns the input unchanged in both modes.
//! - Output keeps the relative order of the input.
//! - Each contact's tags are recomputed from its own display name.

use crate::model::contact::Contact;
use crate::tags::extract::contact_tags;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// How selected tags combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Every selected tag must be present.
    #[default]
    All,
    /// At least one selected tag must be present.
    Any,
}

impl Display for FilterMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Any => f.write_str("any"),
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" | "and" => Ok(Self::All),
            "any" | "or" => Ok(Self::Any),
            other => Err(format!("unknown filter mode `{other}`; expected all|any")),
        }
    }
}

/// Returns the contacts whose tags satisfy `selected_tags` under `mode`.
///
/// `selected_tags` must already be normalized (see
/// [`normalize_tag`](crate::tags::extract::normalize_tag)).
pub fn filter_contacts<'a>(
    contacts: &'a [Contact],
    selected_tags: &[String],
    mode: FilterMode,
) -> Vec<&'a Contact> {
    if selected_tags.is_empty() {
        return contacts.iter().collect();
    }

    contacts
        .iter()
        .filter(|contact| contact_matches(contact, selected_tags, mode))
        .collect()
}

/// Tests one contact against `selected_tags`; an empty selection matches.
pub fn contact_matches(contact: &Contact, selected_tags: &[String], mode: FilterMode) -> bool {
    if selected_tags.is_empty() {
        return true;
    }
    let tags = contact_tags(&contact.display_name);
    match mode {
        FilterMode::All => selected_tags.iter().all(|tag| tags.contains(tag)),
        FilterMode::Any => selected_tags.iter().any(|tag| tags.contains(tag)),
    }
}
