//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

use crate::gateway::TutorAction;

/// Errors emitted by the tutor backend gateway.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatewayError {
    #[error("invalid backend URL: {0}")]
    InvalidBaseUrl(String),
    #[error("backend returned {status}")]
    Api {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("backend returned an empty reply")]
    EmptyReply,
}

impl GatewayError {
    /// Text shown to the learner when `action` fails.
    ///
    /// The backend's `detail` wins when present; everything else collapses to
    /// the action's generic message.
    #[must_use]
    pub fn user_message(&self, action: TutorAction) -> String {
        let fallback = action.fallback_message();
        match self {
            Self::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Api { detail: None, .. } | Self::EmptyReply => fallback.to_string(),
            Self::Http(_) => format!("{fallback}: could not reach the tutor backend"),
            Self::Decode(_) => format!("{fallback}: unexpected response from the tutor backend"),
            Self::InvalidBaseUrl(raw) => format!("{fallback}: invalid backend URL {raw}"),
        }
    }
}

/// Errors emitted by `PreferencesService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PreferencesServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
