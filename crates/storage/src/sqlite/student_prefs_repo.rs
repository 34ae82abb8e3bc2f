use async_trait::async_trait;
use sqlx::Row;

use atelier_core::model::Track;

use crate::repository::{StorageError, StudentPrefsRepository};

use super::SqliteRepository;
use super::mapping::{decode_track, encode_track};

#[async_trait]
impl StudentPrefsRepository for SqliteRepository {
    async fn load_track(&self) -> Result<Option<Track>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT study_track
            FROM student_prefs
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let raw: String = row
            .try_get("study_track")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        decode_track(&raw).map(Some)
    }

    async fn save_track(&self, track: Track) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO student_prefs (id, study_track)
            VALUES (?1, ?2)
            ON CONFLICT(id) DO UPDATE SET
                study_track = excluded.study_track
            ",
        )
        .bind(1_i64)
        .bind(encode_track(track))
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
