//! Credentials management infrastructure
//!
//! In-memory secret slots shared by the integration clients:
//! - Seeding from environment variables
//! - Set / presence / readiness operations
//! - Credential resolution for outgoing requests

pub mod store;

pub use store::{
    COMPLETION_KEY_VAR, HOSTING_TOKEN_FALLBACK_VAR, HOSTING_TOKEN_VAR, SecretStore,
};
