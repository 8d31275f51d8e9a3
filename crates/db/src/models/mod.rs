//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Records are never updated through the site, so there are no update DTOs.

pub mod blog;
pub mod category;
pub mod contact;
pub mod image;
pub mod info;
pub mod mail;
pub mod project;
pub mod service;
