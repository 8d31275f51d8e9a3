//! Portfolio website server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! page handlers, fixture loading) so integration tests and both binaries
//! can share them.

pub mod app;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod notify;
pub mod routes;
pub mod state;
pub mod templates;
