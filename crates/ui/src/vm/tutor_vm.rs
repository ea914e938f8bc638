use services::{GatewayError, TutorAction};
use tutor_core::model::{
    ChatLog, ChatTurn, Curriculum, Language, Lesson, Preferences, Progress, Theme, Topic, UserId,
};

use crate::vm::confetti_vm::{ConfettiPieceVm, confetti_burst};

const MISSING_USER_MESSAGE: &str = "Enter your email or username first.";

/// A lesson together with the language it was fetched in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedLesson {
    pub lesson: Lesson,
    pub language: Language,
}

/// Transient confetti state after a successful completion.
#[derive(Clone, Debug, PartialEq)]
pub struct Celebration {
    id: u64,
    topic: Topic,
    pieces: Vec<ConfettiPieceVm>,
}

impl Celebration {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    #[must_use]
    pub fn pieces(&self) -> &[ConfettiPieceVm] {
        &self.pieces
    }
}

/// What a successful completion produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Completion {
    pub celebration_id: u64,
    pub next_topic: Option<Topic>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatRequest {
    pub user: UserId,
    pub message: String,
    pub topic: Topic,
}

/// Everything the tutor page shows.
///
/// Mutations are synchronous `begin_*`/`finish_*` pairs so callers can hold
/// the state only briefly on either side of a backend call.
#[derive(Clone, Debug, PartialEq)]
pub struct TutorVm {
    curriculum: Curriculum,
    user_input: String,
    language: Language,
    theme: Theme,
    active_user: Option<UserId>,
    progress: Option<Progress>,
    selected_topic: Topic,
    lesson: Option<LoadedLesson>,
    loading: bool,
    syncing: bool,
    error: Option<String>,
    chat: ChatLog,
    chat_pending: bool,
    chat_open: bool,
    celebration: Option<Celebration>,
    celebrations: u64,
}

impl TutorVm {
    #[must_use]
    pub fn new(curriculum: Curriculum, preferences: &Preferences) -> Self {
        let selected_topic = curriculum.first().clone();
        Self {
            curriculum,
            user_input: preferences.user_id().as_str().to_string(),
            language: preferences.language(),
            theme: preferences.theme(),
            active_user: None,
            progress: None,
            selected_topic,
            lesson: None,
            loading: false,
            syncing: false,
            error: None,
            chat: ChatLog::new(),
            chat_pending: false,
            chat_open: false,
            celebration: None,
            celebrations: 0,
        }
    }

    #[must_use]
    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    #[must_use]
    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn active_user(&self) -> Option<&UserId> {
        self.active_user.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> Option<&Progress> {
        self.progress.as_ref()
    }

    /// Mirrors the backend's last answer; `None` before first contact too.
    #[must_use]
    pub fn next_topic(&self) -> Option<&Topic> {
        self.progress.as_ref().and_then(|p| p.next_topic.as_ref())
    }

    #[must_use]
    pub fn is_completed(&self, topic: &Topic) -> bool {
        self.progress
            .as_ref()
            .is_some_and(|progress| progress.is_completed(topic))
    }

    #[must_use]
    pub fn selected_topic(&self) -> &Topic {
        &self.selected_topic
    }

    #[must_use]
    pub fn lesson(&self) -> Option<&LoadedLesson> {
        self.lesson.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_syncing(&self) -> bool {
        self.syncing
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }

    #[must_use]
    pub fn is_chat_pending(&self) -> bool {
        self.chat_pending
    }

    #[must_use]
    pub fn is_chat_open(&self) -> bool {
        self.chat_open
    }

    #[must_use]
    pub fn celebration(&self) -> Option<&Celebration> {
        self.celebration.as_ref()
    }

    /// Preferences reflecting the current inputs.
    #[must_use]
    pub fn preferences(&self) -> Preferences {
        let user = UserId::new(self.user_input.as_str())
            .ok()
            .or_else(|| self.active_user.clone())
            .unwrap_or_else(|| Preferences::default().user_id().clone());
        Preferences::new(user, self.language, self.theme)
    }

    pub fn set_user_input(&mut self, value: String) {
        self.user_input = value;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn select_topic(&mut self, topic: Topic) {
        self.selected_topic = topic;
    }

    fn input_user(&mut self) -> Option<UserId> {
        match UserId::new(self.user_input.as_str()) {
            Ok(user) => Some(user),
            Err(_) => {
                self.error = Some(MISSING_USER_MESSAGE.to_string());
                None
            }
        }
    }

    /// Start an init call. Returns `None` when the user id input is blank.
    pub fn begin_init(&mut self) -> Option<(UserId, Language)> {
        self.error = None;
        let user = self.input_user()?;
        self.syncing = true;
        Some((user, self.language))
    }

    /// Apply an init result. On success returns the topic to load next.
    pub fn finish_init(
        &mut self,
        user: UserId,
        result: Result<Progress, GatewayError>,
    ) -> Option<Topic> {
        self.syncing = false;
        match result {
            Ok(progress) => {
                let topic = progress
                    .next_topic
                    .clone()
                    .unwrap_or_else(|| self.curriculum.first().clone());
                self.selected_topic = topic.clone();
                self.progress = Some(progress);
                self.active_user = Some(user);
                Some(topic)
            }
            Err(err) => {
                self.error = Some(err.user_message(TutorAction::Init));
                None
            }
        }
    }

    /// Start a lesson fetch; returns the language to request it in.
    pub fn begin_lesson(&mut self) -> Language {
        self.loading = true;
        self.error = None;
        self.language
    }

    pub fn finish_lesson(&mut self, language: Language, result: Result<Lesson, GatewayError>) {
        self.loading = false;
        match result {
            Ok(lesson) => self.lesson = Some(LoadedLesson { lesson, language }),
            Err(err) => self.error = Some(err.user_message(TutorAction::LoadLesson)),
        }
    }

    /// Start completing the selected topic.
    pub fn begin_complete(&mut self) -> Option<(UserId, Topic)> {
        self.error = None;
        let user = self.input_user()?;
        self.syncing = true;
        Some((user, self.selected_topic.clone()))
    }

    /// Apply a completion result. `topic` is the topic that was completed.
    pub fn finish_complete(
        &mut self,
        topic: Topic,
        result: Result<Progress, GatewayError>,
    ) -> Option<Completion> {
        self.syncing = false;
        match result {
            Ok(progress) => {
                let next_topic = progress.next_topic.clone();
                if let Some(next) = next_topic.as_ref() {
                    self.selected_topic = next.clone();
                }
                self.progress = Some(progress);
                self.celebrations += 1;
                self.celebration = Some(Celebration {
                    id: self.celebrations,
                    topic,
                    pieces: confetti_burst(),
                });
                Some(Completion {
                    celebration_id: self.celebrations,
                    next_topic,
                })
            }
            Err(err) => {
                self.error = Some(err.user_message(TutorAction::Complete));
                None
            }
        }
    }

    /// Clear the celebration unless a newer one replaced it.
    pub fn clear_celebration(&mut self, id: u64) {
        if self.celebration.as_ref().is_some_and(|c| c.id == id) {
            self.celebration = None;
        }
    }

    /// Whether a submitted draft would be sent. The input keeps its text otherwise.
    #[must_use]
    pub fn accepts_chat(&self, draft: &str) -> bool {
        !self.chat_pending && !draft.trim().is_empty()
    }

    /// Queue a chat message. The user turn is appended right away.
    pub fn begin_chat(&mut self, message: &str) -> Option<ChatRequest> {
        let message = message.trim();
        if message.is_empty() || self.chat_pending {
            return None;
        }
        let Ok(user) = UserId::new(self.user_input.as_str()) else {
            self.chat
                .push(ChatTurn::assistant_error(MISSING_USER_MESSAGE));
            return None;
        };
        self.chat.push(ChatTurn::user(message));
        self.chat_pending = true;
        Some(ChatRequest {
            user,
            message: message.to_string(),
            topic: self.selected_topic.clone(),
        })
    }

    pub fn finish_chat(&mut self, result: Result<String, GatewayError>) {
        self.chat_pending = false;
        let turn = match result {
            Ok(reply) => ChatTurn::assistant(reply),
            Err(err) => ChatTurn::assistant_error(err.user_message(TutorAction::Chat)),
        };
        self.chat.push(turn);
    }
}

impl Default for TutorVm {
    fn default() -> Self {
        Self::new(Curriculum::dsa(), &Preferences::default())
    }
}
