//! Domain building blocks shared by the database and web crates.
//!
//! Nothing in here talks to PostgreSQL or HTTP: the contact form, upload
//! naming and the media storage seam live here so both the server and the
//! fixture loader can use them.

pub mod error;
pub mod forms;
pub mod media;
pub mod types;
