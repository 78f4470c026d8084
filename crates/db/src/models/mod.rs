//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod blog_post;
pub mod booking;
pub mod contact_message;
pub mod destination;
pub mod package;
pub mod session;
pub mod user;
