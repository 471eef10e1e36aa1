//! Use-case services over the stores.
//!
//! # Responsibility
//! - Turn operator edits into whole-store writes.
//! - Reject usage errors before anything is persisted.

pub mod contact_service;
pub mod list_service;
