use std::sync::Arc;

use storage::repository::PreferencesRepository;
use tutor_core::model::Preferences;

use crate::error::PreferencesServiceError;

#[derive(Clone)]
pub struct PreferencesService {
    repo: Arc<dyn PreferencesRepository>,
}

impl PreferencesService {
    #[must_use]
    pub fn new(repo: Arc<dyn PreferencesRepository>) -> Self {
        Self { repo }
    }

    /// Load persisted preferences (or defaults if missing).
    ///
    /// # Errors
    ///
    /// Returns `PreferencesServiceError` on storage failures.
    pub async fn load(&self) -> Result<Preferences, PreferencesServiceError> {
        let preferences = self.repo.get_preferences().await?;
        Ok(preferences.unwrap_or_default())
    }

    /// Persist preferences.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesServiceError` if persistence fails.
    pub async fn save(&self, preferences: &Preferences) -> Result<(), PreferencesServiceError> {
        self.repo.save_preferences(preferences).await?;
        tracing::debug!(
            user = %preferences.user_id(),
            language = %preferences.language(),
            theme = %preferences.theme(),
            "preferences saved"
        );
        Ok(())
    }
}
