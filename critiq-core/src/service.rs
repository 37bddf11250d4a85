//! Review submission workflow
//!
//! Sequences the one non-trivial control flow in the system: validate the
//! submission, call the generator, parse the response, store the record.
//! Each step maps its failure into the matching error variant; nothing is
//! retried and nothing is stored unless generation succeeded.

use std::sync::Arc;

use tracing::{info, warn};

use critiq_db::{Database, NewReview, ReviewRecord};

use crate::generator::Generator;
use crate::parse::parse_response;
use crate::prompt::ReviewPrompt;
use crate::{Error, Result};

/// Orchestrates review generation and storage
pub struct ReviewService {
    generator: Arc<dyn Generator>,
    db: Database,
}

impl ReviewService {
    /// Create a new review service
    pub fn new(generator: Arc<dyn Generator>, db: Database) -> Self {
        Self { generator, db }
    }

    /// Submit code for review and return the stored record
    ///
    /// Empty or whitespace-only code fails with `Error::Validation` before
    /// the generator is ever invoked. A generation failure stores nothing.
    /// A persistence failure after successful generation surfaces as
    /// `Error::Persistence`: the result exists but was not saved.
    pub async fn submit(&self, code: &str) -> Result<ReviewRecord> {
        if code.trim().is_empty() {
            return Err(Error::Validation("No code provided".to_string()));
        }

        let prompt = ReviewPrompt::for_code(code);

        info!(
            generator = self.generator.name(),
            code_len = code.len(),
            "requesting review"
        );
        let response = self.generator.generate(&prompt).await?;

        let parsed = parse_response(&response);
        let mut review = NewReview::new(code, parsed.review);
        if let Some(optimized) = parsed.optimized_code {
            review = review.with_optimized_code(optimized);
        }

        let record = self.db.reviews().insert(review).await.map_err(|e| {
            warn!(error = %e, "review generated but not saved");
            Error::Persistence(format!(
                "Review was generated but could not be saved: {}",
                e
            ))
        })?;

        info!(id = record.id, "review stored");
        Ok(record)
    }

    /// List stored reviews, most recent first
    pub async fn list(&self) -> Result<Vec<ReviewRecord>> {
        self.db.reviews().list().await.map_err(Into::into)
    }

    /// Delete a stored review by id
    ///
    /// Returns whether a record was removed; deleting an unknown id is a
    /// no-op, not an error.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let deleted = self.db.reviews().delete(id).await?;
        if deleted {
            info!(id, "review deleted");
        }
        Ok(deleted)
    }
}
