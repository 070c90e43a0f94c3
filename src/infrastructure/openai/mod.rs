//! OpenAI Chat Completions integration

pub mod client;
pub mod types;

pub use client::CompletionClient;
pub use types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
