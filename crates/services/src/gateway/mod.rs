//! Backend gateway: the four HTTP calls the client makes.

use async_trait::async_trait;
use tutor_core::model::{Language, Lesson, Progress, Topic, UserId};

use crate::error::GatewayError;

mod config;
mod http;

pub use config::{DEFAULT_BACKEND_URL, GatewayConfig};
pub use http::HttpTutorBackend;

/// Learner-facing actions, used to pick a fallback error message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TutorAction {
    Init,
    LoadLesson,
    Complete,
    Chat,
}

impl TutorAction {
    #[must_use]
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Init => "Init failed",
            Self::LoadLesson => "Failed to load lesson",
            Self::Complete => "Failed to update progress",
            Self::Chat => "Chat failed",
        }
    }
}

/// Contract for the tutor backend. One attempt per call; no retries.
#[async_trait]
pub trait TutorBackend: Send + Sync {
    /// Create or resume the learner's progress record.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` on transport failures, non-2xx responses or
    /// undecodable bodies.
    async fn init_progress(
        &self,
        user: &UserId,
        language: Language,
    ) -> Result<Progress, GatewayError>;

    /// Fetch the lesson for a topic in the given language.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` on transport failures, non-2xx responses or
    /// undecodable bodies.
    async fn fetch_lesson(&self, topic: &Topic, language: Language)
    -> Result<Lesson, GatewayError>;

    /// Mark a topic complete and return the updated progress.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` on transport failures, non-2xx responses or
    /// undecodable bodies.
    async fn complete_topic(&self, user: &UserId, topic: &Topic)
    -> Result<Progress, GatewayError>;

    /// Ask the assistant a question about the current topic.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::EmptyReply` when the reply is blank, and the
    /// usual transport/status/decode errors otherwise.
    async fn chat(
        &self,
        user: &UserId,
        message: &str,
        topic: &Topic,
    ) -> Result<String, GatewayError>;
}
