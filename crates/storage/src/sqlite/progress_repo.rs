use chrono::Utc;
use quran_core::model::ReadingProgress;
use sqlx::Row;

use super::SqliteRepository;
use crate::repository::{ProgressRepository, StorageError, parse_or_default};

#[async_trait::async_trait]
impl ProgressRepository for SqliteRepository {
    async fn load(&self) -> Result<ReadingProgress, StorageError> {
        let row = sqlx::query("SELECT data FROM reading_progress WHERE id = 1")
            .fetch_optional(self.pool())
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(match row {
            Some(row) => {
                let raw: String = row
                    .try_get("data")
                    .map_err(|e| StorageError::Serialization(e.to_string()))?;
                parse_or_default(&raw)
            }
            None => ReadingProgress::default(),
        })
    }

    async fn save(&self, progress: &ReadingProgress) -> Result<(), StorageError> {
        let raw = serde_json::to_string(progress)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        // Single-statement upsert: the whole value is replaced atomically,
        // so readers never observe a partial write.
        sqlx::query(
            r"
            INSERT INTO reading_progress (id, data, updated_at)
            VALUES (1, ?1, ?2)
            ON CONFLICT(id) DO UPDATE SET
                data = excluded.data,
                updated_at = excluded.updated_at
            ",
        )
        .bind(raw)
        .bind(Utc::now().to_rfc3339())
        .execute(self.pool())
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }
}
