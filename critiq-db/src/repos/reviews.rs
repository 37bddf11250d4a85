//! Review repository for insert, list, and delete of stored reviews

use crate::error::{Error, Result};
use crate::models::{NewReview, ReviewRecord};
use chrono::Utc;
use sqlx::SqlitePool;

/// Repository for stored review records
pub struct ReviewRepository {
    pool: SqlitePool,
}

impl ReviewRepository {
    /// Create a new review repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new review record, assigning its id and creation time
    pub async fn insert(&self, review: NewReview) -> Result<ReviewRecord> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO reviews (code, review, optimized_code, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&review.code)
        .bind(&review.review)
        .bind(&review.optimized_code)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.get(result.last_insert_rowid()).await
    }

    /// Get a review record by its id
    pub async fn get(&self, id: i64) -> Result<ReviewRecord> {
        sqlx::query_as::<_, ReviewRecord>("SELECT * FROM reviews WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => Error::NotFound(format!("review {}", id)),
                e => e.into(),
            })
    }

    /// List all review records, most recent first
    pub async fn list(&self) -> Result<Vec<ReviewRecord>> {
        sqlx::query_as::<_, ReviewRecord>(
            "SELECT * FROM reviews ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }

    /// Delete a review record by id
    ///
    /// Returns whether a record was actually removed. Deleting an id that
    /// does not exist is a no-op, not an error.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count stored review records
    pub async fn count(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reviews")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;
    use tempfile::TempDir;

    async fn setup_test_db() -> (Database, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(temp_dir.path().join("test.db"))
            .await
            .unwrap();
        (db, temp_dir)
    }

    #[tokio::test]
    async fn test_insert_preserves_code_exactly() {
        let (db, _temp) = setup_test_db().await;
        let repo = db.reviews();

        // Leading/trailing whitespace must survive storage untouched
        let code = "  function add(a,b){return a+b}\n\t";
        let record = repo
            .insert(NewReview::new(code, "Quality score: 7/10"))
            .await
            .unwrap();

        assert_eq!(record.code, code);
        assert_eq!(record.review, "Quality score: 7/10");

        let fetched = repo.get(record.id).await.unwrap();
        assert_eq!(fetched.code, code);
    }

    #[tokio::test]
    async fn test_insert_stores_optimized_code() {
        let (db, _temp) = setup_test_db().await;
        let repo = db.reviews();

        let with = repo
            .insert(
                NewReview::new("let x = 1", "Use const.").with_optimized_code("const x = 1"),
            )
            .await
            .unwrap();
        assert_eq!(with.optimized_code.as_deref(), Some("const x = 1"));

        let without = repo
            .insert(NewReview::new("let y = 2", "Fine as is."))
            .await
            .unwrap();
        assert!(without.optimized_code.is_none());

        let fetched = repo.get(without.id).await.unwrap();
        assert!(fetched.optimized_code.is_none());
    }

    #[tokio::test]
    async fn test_list_orders_most_recent_first() {
        let (db, _temp) = setup_test_db().await;
        let repo = db.reviews();

        for i in 1..=3 {
            repo.insert(NewReview::new(format!("code {}", i), format!("review {}", i)))
                .await
                .unwrap();
        }

        let records = repo.list().await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].code, "code 3");
        assert_eq!(records[1].code, "code 2");
        assert_eq!(records[2].code, "code 1");

        for pair in records.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
            assert!(pair[0].id > pair[1].id);
        }
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (db, _temp) = setup_test_db().await;
        let repo = db.reviews();

        let record = repo
            .insert(NewReview::new("delete me", "gone soon"))
            .await
            .unwrap();

        assert!(repo.delete(record.id).await.unwrap());
        // Second delete of the same id is a no-op, not an error
        assert!(!repo.delete(record.id).await.unwrap());

        let records = repo.list().await.unwrap();
        assert!(records.iter().all(|r| r.id != record.id));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_returns_false() {
        let (db, _temp) = setup_test_db().await;
        let repo = db.reviews();

        assert!(!repo.delete(9999).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_code_creates_distinct_records() {
        let (db, _temp) = setup_test_db().await;
        let repo = db.reviews();

        let code = "function add(a,b){return a+b}";
        let first = repo.insert(NewReview::new(code, "first pass")).await.unwrap();
        let second = repo.insert(NewReview::new(code, "second pass")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_missing_returns_not_found() {
        let (db, _temp) = setup_test_db().await;
        let repo = db.reviews();

        let err = repo.get(42).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        {
            let db = Database::new(&db_path).await.unwrap();
            db.reviews()
                .insert(NewReview::new("persist me", "still here"))
                .await
                .unwrap();
        }

        let db = Database::new(&db_path).await.unwrap();
        let records = db.reviews().list().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "persist me");
    }
}
