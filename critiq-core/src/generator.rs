//! Generator abstraction for review text

use async_trait::async_trait;

use crate::prompt::ReviewPrompt;
use crate::Result;

/// Trait for services that turn a review prompt into review text
///
/// This is the single seam between the review workflow and the external LLM
/// provider; tests substitute a local implementation.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Get the name of this generator
    fn name(&self) -> &'static str;

    /// Generate review text for a prompt
    ///
    /// Resolves to the raw response text. Fails with `Error::Generation` when
    /// the upstream call fails or returns an unusable payload. Implementations
    /// must not retry.
    async fn generate(&self, prompt: &ReviewPrompt) -> Result<String>;
}
