//! Domain records for the contact desk.
//!
//! # Responsibility
//! - Define the contact record and the table shape it is persisted in.
//! - Keep extra file columns in an explicit attribute bag.
//!
//! # Invariants
//! - `display_name` is the only required field of a contact.
//! - Contact order is insertion order; nothing here reorders it.

pub mod contact;
