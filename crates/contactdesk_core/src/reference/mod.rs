//! Read-only reference documents.
//!
//! # Responsibility
//! - Read the channel matrix spreadsheet and partition operators.
//! - Read paragraph text from the channel list document.
//!
//! # Invariants
//! - Nothing here writes to the reference files.
//! - Failures are returned as values so callers can keep other panels usable.

pub mod document;
pub mod matrix;
