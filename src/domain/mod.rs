//! Domain layer for notebook-link
//!
//! Credentials, request models, configuration and the host port.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{IntegrationError, IntegrationResult};
