use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tutor_core::model::{Language, Lesson, Progress, Topic, UserId};

use crate::error::GatewayError;

use super::{GatewayConfig, TutorBackend};

/// `reqwest`-backed gateway to the tutor backend.
#[derive(Clone)]
pub struct HttpTutorBackend {
    client: Client,
    config: GatewayConfig,
}

impl HttpTutorBackend {
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, GatewayError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::into_detail);
            tracing::warn!(%status, detail = ?detail, "tutor backend rejected request");
            return Err(GatewayError::Api { status, detail });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl TutorBackend for HttpTutorBackend {
    async fn init_progress(
        &self,
        user: &UserId,
        language: Language,
    ) -> Result<Progress, GatewayError> {
        let url = self.config.endpoint(&["api", "progress", "init"]);
        tracing::debug!(%url, %user, %language, "init progress");
        let payload = InitRequest {
            user_id: user.as_str(),
            preferred_language: language,
        };
        self.send(self.client.post(url).json(&payload)).await
    }

    async fn fetch_lesson(
        &self,
        topic: &Topic,
        language: Language,
    ) -> Result<Lesson, GatewayError> {
        let mut url = self.config.endpoint(&["api", "lesson", topic.as_str()]);
        url.query_pairs_mut().append_pair("lang", language.as_str());
        tracing::debug!(%url, %topic, %language, "fetch lesson");
        self.send(self.client.get(url)).await
    }

    async fn complete_topic(
        &self,
        user: &UserId,
        topic: &Topic,
    ) -> Result<Progress, GatewayError> {
        let url = self.config.endpoint(&["api", "progress", "complete"]);
        tracing::debug!(%url, %user, %topic, "complete topic");
        let payload = CompleteRequest {
            user_id: user.as_str(),
            topic: topic.as_str(),
        };
        self.send(self.client.post(url).json(&payload)).await
    }

    async fn chat(
        &self,
        user: &UserId,
        message: &str,
        topic: &Topic,
    ) -> Result<String, GatewayError> {
        let url = self.config.endpoint(&["api", "chat"]);
        tracing::debug!(%url, %user, %topic, "chat");
        let payload = ChatRequest {
            user_id: user.as_str(),
            message,
            topic: topic.as_str(),
        };
        let body: ChatResponse = self.send(self.client.post(url).json(&payload)).await?;
        body.reply
            .map(|reply| reply.trim().to_string())
            .filter(|reply| !reply.is_empty())
            .ok_or(GatewayError::EmptyReply)
    }
}

#[derive(Debug, Serialize)]
struct InitRequest<'a> {
    user_id: &'a str,
    preferred_language: Language,
}

#[derive(Debug, Serialize)]
struct CompleteRequest<'a> {
    user_id: &'a str,
    topic: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    user_id: &'a str,
    message: &'a str,
    topic: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    reply: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<Value>,
}

impl ErrorBody {
    // Only string details are shown; validation error lists fall back.
    fn into_detail(self) -> Option<String> {
        match self.detail? {
            Value::String(detail) if !detail.trim().is_empty() => Some(detail),
            _ => None,
        }
    }
}
