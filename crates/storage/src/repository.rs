use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tutor_core::model::Preferences;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for learner-local client preferences.
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// Fetch the stored preferences, if any were ever saved.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or holds invalid data.
    async fn get_preferences(&self) -> Result<Option<Preferences>, StorageError>;

    /// Persist preferences, replacing what was stored before.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the preferences cannot be stored.
    async fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and throwaway sessions.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    preferences: Arc<Mutex<Option<Preferences>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            preferences: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl PreferencesRepository for InMemoryRepository {
    async fn get_preferences(&self) -> Result<Option<Preferences>, StorageError> {
        let guard = self
            .preferences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError> {
        let mut guard = self
            .preferences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(preferences.clone());
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub preferences: Arc<dyn PreferencesRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let preferences: Arc<dyn PreferencesRepository> = Arc::new(InMemoryRepository::new());
        Self { preferences }
    }
}
