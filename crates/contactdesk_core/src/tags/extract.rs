//! Tag extraction from display names.
//!
//! # Invariants
//! - A token is `+` followed by one or more word characters.
//! - Tokens that are `+` followed by digits only are phone-like IDs and are
//!   never tags.
//! - Output of [`extract_tags`] is sorted and free of duplicates.

use crate::model::contact::Contact;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static TAG_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+\w+").expect("valid tag token regex"));
static NUMERIC_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+\d+$").expect("valid numeric token regex"));

/// Returns the normalized tag set of one display name.
pub fn contact_tags(display_name: &str) -> BTreeSet<String> {
    TAG_TOKEN_RE
        .find_iter(display_name)
        .map(|token| token.as_str())
        .filter(|token| !NUMERIC_TOKEN_RE.is_match(token))
        .map(str::to_lowercase)
        .collect()
}

/// Returns every distinct tag of `contacts`, sorted ascending.
pub fn extract_tags(contacts: &[Contact]) -> Vec<String> {
    contacts
        .iter()
        .flat_map(|contact| contact_tags(&contact.display_name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Normalizes operator input into tag form: trimmed, lowercase, `+`-prefixed.
///
/// Returns `None` for blank input.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_start_matches('+');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("+{}", trimmed.to_lowercase()))
}
