use std::sync::Arc;

use services::{PreferencesService, TutorBackend};
use tutor_core::model::{Curriculum, Preferences};

pub trait UiApp: Send + Sync {
    fn backend(&self) -> Arc<dyn TutorBackend>;
    fn preferences(&self) -> Arc<PreferencesService>;

    /// Preferences loaded at startup, used to seed the first render.
    fn initial_preferences(&self) -> Preferences;

    fn curriculum(&self) -> Curriculum {
        Curriculum::dsa()
    }
}

#[derive(Clone)]
pub struct AppContext {
    backend: Arc<dyn TutorBackend>,
    preferences: Arc<PreferencesService>,
    initial_preferences: Preferences,
    curriculum: Curriculum,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            backend: app.backend(),
            preferences: app.preferences(),
            initial_preferences: app.initial_preferences(),
            curriculum: app.curriculum(),
        }
    }

    #[must_use]
    pub fn backend(&self) -> Arc<dyn TutorBackend> {
        Arc::clone(&self.backend)
    }

    #[must_use]
    pub fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }

    #[must_use]
    pub fn initial_preferences(&self) -> &Preferences {
        &self.initial_preferences
    }

    #[must_use]
    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
