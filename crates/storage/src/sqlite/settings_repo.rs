use async_trait::async_trait;
use sqlx::Row;

use quiz_core::model::Language;

use crate::repository::{SettingsRepository, StorageError};

use super::SqliteRepository;

#[async_trait]
impl SettingsRepository for SqliteRepository {
    async fn get_language(&self) -> Result<Option<Language>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT language
            FROM app_settings
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let code: String = row
            .try_get("language")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        code.parse::<Language>()
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn save_language(&self, language: Language) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO app_settings (id, language)
            VALUES (?1, ?2)
            ON CONFLICT(id) DO UPDATE SET
                language = excluded.language
            ",
        )
        .bind(1_i64)
        .bind(language.as_str())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
