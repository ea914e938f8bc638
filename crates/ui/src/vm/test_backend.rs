use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use services::{GatewayError, PreferencesService, TutorBackend};
use storage::repository::InMemoryRepository;
use tutor_core::model::{Language, Lesson, Preferences, Progress, Topic, UserId};

use crate::context::{AppContext, UiApp, build_app_context};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendCall {
    Init { user: String, language: Language },
    Lesson { topic: String, language: Language },
    Complete { user: String, topic: String },
    Chat { user: String, message: String, topic: String },
}

/// Backend double that replays queued results and records every call.
///
/// Lessons default to an echo of the requested topic when nothing is queued.
#[derive(Default)]
pub struct ScriptedBackend {
    progress: Mutex<VecDeque<Result<Progress, GatewayError>>>,
    lessons: Mutex<VecDeque<Result<Lesson, GatewayError>>>,
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    calls: Mutex<Vec<BackendCall>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_progress(&self, result: Result<Progress, GatewayError>) {
        self.progress.lock().unwrap().push_back(result);
    }

    pub fn push_lesson(&self, result: Result<Lesson, GatewayError>) {
        self.lessons.lock().unwrap().push_back(result);
    }

    pub fn push_reply(&self, result: Result<String, GatewayError>) {
        self.replies.lock().unwrap().push_back(result);
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: BackendCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_progress(&self) -> Result<Progress, GatewayError> {
        self.progress
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(api_error(500, None)))
    }
}

#[async_trait]
impl TutorBackend for ScriptedBackend {
    async fn init_progress(
        &self,
        user: &UserId,
        language: Language,
    ) -> Result<Progress, GatewayError> {
        self.record(BackendCall::Init {
            user: user.to_string(),
            language,
        });
        self.next_progress()
    }

    async fn fetch_lesson(
        &self,
        topic: &Topic,
        language: Language,
    ) -> Result<Lesson, GatewayError> {
        self.record(BackendCall::Lesson {
            topic: topic.to_string(),
            language,
        });
        self.lessons
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(lesson_for(topic)))
    }

    async fn complete_topic(
        &self,
        user: &UserId,
        topic: &Topic,
    ) -> Result<Progress, GatewayError> {
        self.record(BackendCall::Complete {
            user: user.to_string(),
            topic: topic.to_string(),
        });
        self.next_progress()
    }

    async fn chat(
        &self,
        user: &UserId,
        message: &str,
        topic: &Topic,
    ) -> Result<String, GatewayError> {
        self.record(BackendCall::Chat {
            user: user.to_string(),
            message: message.to_string(),
            topic: topic.to_string(),
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::EmptyReply))
    }
}

pub fn api_error(status: u16, detail: Option<&str>) -> GatewayError {
    GatewayError::Api {
        status: reqwest::StatusCode::from_u16(status).unwrap(),
        detail: detail.map(str::to_string),
    }
}

pub fn progress_with(completed: &[&str], next: Option<&str>) -> Progress {
    Progress {
        user_id: "student@example.com".into(),
        current_topic: next.map(|name| Topic::new(name).unwrap()),
        completed_topics: completed
            .iter()
            .map(|name| Topic::new(*name).unwrap())
            .collect(),
        next_topic: next.map(|name| Topic::new(name).unwrap()),
    }
}

pub fn lesson_for(topic: &Topic) -> Lesson {
    Lesson {
        topic: topic.clone(),
        overview: format!("All about {topic}."),
        pseudocode: None,
        code: Some("print('hello')".into()),
        practice: None,
        complexity_note: None,
    }
}

struct TestApp {
    backend: Arc<ScriptedBackend>,
    preferences: Arc<PreferencesService>,
    initial: Preferences,
}

impl UiApp for TestApp {
    fn backend(&self) -> Arc<dyn TutorBackend> {
        self.backend.clone()
    }

    fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }

    fn initial_preferences(&self) -> Preferences {
        self.initial.clone()
    }
}

/// Context wired to a scripted backend and in-memory preferences.
pub fn test_context(backend: Arc<ScriptedBackend>, repo: InMemoryRepository) -> AppContext {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        backend,
        preferences: Arc::new(PreferencesService::new(Arc::new(repo))),
        initial: Preferences::default(),
    });
    build_app_context(&app)
}
