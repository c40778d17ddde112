//! HTTP client for the external fbfs computation backend.

mod client;
mod error;

pub use client::{BackendClient, CallStyle, DEFAULT_TIMEOUT};
pub use error::{ClientError, Result};
