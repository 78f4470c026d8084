//! Domain logic for the Voyara tour-operator platform.
//!
//! Pure types and functions with no database or HTTP dependencies, so they
//! can be used by the API, the repository layer, and any future CLI tooling.

pub mod booking;
pub mod contact;
pub mod error;
pub mod pagination;
pub mod roles;
pub mod slug;
pub mod types;
pub mod validate;
