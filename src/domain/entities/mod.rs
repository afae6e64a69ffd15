//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with separate structs per use:
//! - [`User`] - A persisted record
//! - [`NewUser`] - Input for creating a record
//! - [`UpdateUser`] - Replacement values for an existing record

pub mod user;

pub use user::{NewUser, UpdateUser, User};
