//! critiq core - domain logic for AI-assisted code review
//!
//! This crate validates submissions, builds review prompts, calls a
//! pluggable review generator, and stores results through the optional
//! database layer (`database` feature).

pub mod config;
pub mod error;
pub mod generator;
pub mod parse;
pub mod prompt;
pub mod secrets;
#[cfg(feature = "database")]
pub mod service;

pub use config::Config;
pub use error::{Error, Result};
pub use generator::Generator;
pub use parse::{parse_response, ParsedReview};
pub use prompt::ReviewPrompt;
pub use secrets::Secrets;
#[cfg(feature = "database")]
pub use service::ReviewService;
