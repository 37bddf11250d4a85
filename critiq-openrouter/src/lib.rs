//! OpenRouter integration for critiq
//!
//! Provides the [`OpenRouterClient`], a chat-completions client that
//! implements the `critiq_core::Generator` seam. The API key is injected
//! at construction; see `critiq_core::secrets` for how it is resolved.

mod client;
mod error;

pub use client::OpenRouterClient;
pub use error::{Error, Result};
