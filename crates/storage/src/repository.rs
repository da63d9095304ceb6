use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

use quiz_core::model::Language;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the app's single persisted setting.
///
/// A `None` language means the value has never been stored, which callers
/// treat as first launch.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Fetch the stored language preference, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection or decoding failures. A missing
    /// row is `Ok(None)`, not an error.
    async fn get_language(&self) -> Result<Option<Language>, StorageError>;

    /// Persist the language preference, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn save_language(&self, language: Language) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    language: Arc<Mutex<Option<Language>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepository for InMemoryRepository {
    async fn get_language(&self) -> Result<Option<Language>, StorageError> {
        let guard = self
            .language
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(*guard)
    }

    async fn save_language(&self, language: Language) -> Result<(), StorageError> {
        let mut guard = self
            .language
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(language);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub settings: Arc<dyn SettingsRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            settings: Arc::new(InMemoryRepository::new()),
        }
    }
}
