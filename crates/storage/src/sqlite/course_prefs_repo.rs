use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;
use std::collections::BTreeSet;

use atelier_core::model::{CourseId, FilterState};

use crate::repository::{CoursePrefsRepository, StorageError};

use super::SqliteRepository;
use super::mapping::{decode_category, decode_selector, encode_selector};

#[async_trait]
impl CoursePrefsRepository for SqliteRepository {
    async fn load_filter(&self) -> Result<Option<FilterState>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT track_selector, search_text
            FROM course_filter
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let selector_raw: String = row
            .try_get("track_selector")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let search_text: String = row
            .try_get("search_text")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        let category_rows = sqlx::query("SELECT category FROM filter_categories")
            .fetch_all(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let mut active_categories = BTreeSet::new();
        for category_row in category_rows {
            let raw: String = category_row
                .try_get("category")
                .map_err(|err| StorageError::Serialization(err.to_string()))?;
            active_categories.insert(decode_category(&raw)?);
        }

        Ok(Some(FilterState::new(
            decode_selector(&selector_raw)?,
            active_categories,
            search_text,
        )))
    }

    async fn save_filter(&self, filter: &FilterState) -> Result<(), StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO course_filter (id, track_selector, search_text)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                track_selector = excluded.track_selector,
                search_text = excluded.search_text
            ",
        )
        .bind(1_i64)
        .bind(encode_selector(filter.track_selector()))
        .bind(filter.search_text())
        .execute(&mut *tx)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        sqlx::query("DELETE FROM filter_categories")
            .execute(&mut *tx)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        for category in filter.active_categories() {
            sqlx::query("INSERT INTO filter_categories (category) VALUES (?1)")
                .bind(category.as_str())
                .execute(&mut *tx)
                .await
                .map_err(|err| StorageError::Connection(err.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn load_wishlist(&self) -> Result<Vec<CourseId>, StorageError> {
        let rows = sqlx::query("SELECT course_id FROM wishlist")
            .fetch_all(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            let raw: String = row
                .try_get("course_id")
                .map_err(|err| StorageError::Serialization(err.to_string()))?;
            let id = CourseId::new(raw)
                .map_err(|err| StorageError::Serialization(err.to_string()))?;
            ids.push(id);
        }
        Ok(ids)
    }

    async fn add_wishlist(&self, id: &CourseId) -> Result<(), StorageError> {
        // The primary key enforces set semantics; re-adding is a no-op.
        sqlx::query(
            r"
            INSERT INTO wishlist (course_id, added_at)
            VALUES (?1, ?2)
            ON CONFLICT(course_id) DO NOTHING
            ",
        )
        .bind(id.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn remove_wishlist(&self, id: &CourseId) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM wishlist WHERE course_id = ?1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
