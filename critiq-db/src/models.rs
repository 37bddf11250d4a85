//! Data models for stored reviews

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted code review
///
/// Immutable once created; removed only by an explicit delete.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    /// Unique identifier, assigned by the store on insert and never reused
    pub id: i64,

    /// The submitted source text, stored exactly as received
    pub code: String,

    /// Natural-language review text returned by the generator
    pub review: String,

    /// Optimized code extracted from the generator response, if any
    pub optimized_code: Option<String>,

    /// Insertion timestamp, drives newest-first history ordering
    pub created_at: DateTime<Utc>,
}

/// Payload for inserting a new review record
///
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewReview {
    /// The submitted source text
    pub code: String,

    /// Generated review text
    pub review: String,

    /// Optimized code, when the generator response contained it
    pub optimized_code: Option<String>,
}

impl NewReview {
    /// Create a new insert payload
    pub fn new(code: impl Into<String>, review: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            review: review.into(),
            optimized_code: None,
        }
    }

    /// Attach optimized code to this payload
    pub fn with_optimized_code(mut self, optimized_code: impl Into<String>) -> Self {
        self.optimized_code = Some(optimized_code.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_review_defaults() {
        let review = NewReview::new("fn main() {}", "Looks fine.");
        assert_eq!(review.code, "fn main() {}");
        assert_eq!(review.review, "Looks fine.");
        assert!(review.optimized_code.is_none());
    }

    #[test]
    fn test_new_review_with_optimized_code() {
        let review =
            NewReview::new("let x=1;", "Use a const.").with_optimized_code("const X: i32 = 1;");
        assert_eq!(review.optimized_code.as_deref(), Some("const X: i32 = 1;"));
    }

    #[test]
    fn test_review_record_json_field_names() {
        let record = ReviewRecord {
            id: 7,
            code: "print(1)".to_string(),
            review: "ok".to_string(),
            optimized_code: Some("print(2)".to_string()),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert!(json.get("optimizedCode").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("optimized_code").is_none());
    }

    #[test]
    fn test_review_record_json_omits_nothing_on_none() {
        let record = ReviewRecord {
            id: 1,
            code: "x".to_string(),
            review: "y".to_string(),
            optimized_code: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json["optimizedCode"].is_null());
    }
}
