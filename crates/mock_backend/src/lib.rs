//! Mock fbfs computation backend.
//!
//! Stands in for the external service that generates the logic chain, so
//! the form can be exercised end to end without network access or an API
//! key. Never linked into the production pipeline.

mod server;

pub use server::{router, MockBackendServer};
