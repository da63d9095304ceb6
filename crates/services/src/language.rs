use std::sync::Arc;

use quiz_core::model::Language;
use storage::repository::SettingsRepository;

use crate::error::LanguageServiceError;

/// Loads and persists the interface language preference.
#[derive(Clone)]
pub struct LanguageService {
    repo: Arc<dyn SettingsRepository>,
}

impl LanguageService {
    #[must_use]
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Load the stored preference.
    ///
    /// `None` means nothing has ever been stored: the app is on its first
    /// launch and should show the language prompt.
    ///
    /// # Errors
    ///
    /// Returns `LanguageServiceError` on storage failures.
    pub async fn load(&self) -> Result<Option<Language>, LanguageServiceError> {
        Ok(self.repo.get_language().await?)
    }

    /// Persist a new preference.
    ///
    /// # Errors
    ///
    /// Returns `LanguageServiceError` if persistence fails.
    pub async fn save(&self, language: Language) -> Result<(), LanguageServiceError> {
        self.repo.save_language(language).await?;
        Ok(())
    }
}
