//! GitHub REST API integration

pub mod client;

pub use client::IdentityClient;
