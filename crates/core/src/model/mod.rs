mod chat;
mod ids;
mod language;
mod lesson;
mod preferences;
mod progress;
mod topic;

pub use chat::{ChatLog, ChatRole, ChatTurn};
pub use ids::{UserId, UserIdError};
pub use language::{Language, LanguageParseError};
pub use lesson::{Lesson, Practice, PracticeExample};
pub use preferences::{DEFAULT_USER_ID, Preferences, PreferencesDraft, Theme, ThemeParseError};
pub use progress::Progress;
pub use topic::{Curriculum, Topic, TopicError};
