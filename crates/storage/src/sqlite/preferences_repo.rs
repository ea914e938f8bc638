use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{PreferencesRepository, StorageError};
use tutor_core::model::Preferences;

use super::SqliteRepository;

#[async_trait]
impl PreferencesRepository for SqliteRepository {
    async fn get_preferences(&self) -> Result<Option<Preferences>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT user_id, language, theme
            FROM preferences
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let user_id: String = row
            .try_get("user_id")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let language: String = row
            .try_get("language")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let theme: String = row
            .try_get("theme")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        Preferences::from_persisted(user_id, language, theme)
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO preferences (id, user_id, language, theme, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                user_id = excluded.user_id,
                language = excluded.language,
                theme = excluded.theme,
                updated_at = excluded.updated_at
            ",
        )
        .bind(1_i64)
        .bind(preferences.user_id().as_str())
        .bind(preferences.language().as_str())
        .bind(preferences.theme().as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
