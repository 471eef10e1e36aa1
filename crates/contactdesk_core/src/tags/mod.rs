//! Tag derivation and tag-based filtering.
//!
//! # Responsibility
//! - Extract `+tag` tokens from display names.
//! - Filter contacts by a tag selection in ALL or ANY mode.
//!
//! # Invariants
//! - Tags are derived on demand; nothing here stores them.
//! - A tag is lowercase and keeps its leading `+`.

pub mod extract;
pub mod filter;
