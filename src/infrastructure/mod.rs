//! Infrastructure layer module
//!
//! This module contains all external integrations:
//! - Configuration management
//! - Logging infrastructure
//! - Credentials management
//! - GitHub REST API client
//! - OpenAI Chat Completions client
//! - Drive mount host bridge

pub mod config;
pub mod credentials;
pub mod drive;
pub mod github;
pub mod logging;
pub mod openai;
