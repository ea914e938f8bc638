use thiserror::Error;

use crate::model::{LanguageParseError, ThemeParseError, TopicError, UserIdError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Topic(#[from] TopicError),
    #[error(transparent)]
    UserId(#[from] UserIdError),
    #[error(transparent)]
    Language(#[from] LanguageParseError),
    #[error(transparent)]
    Theme(#[from] ThemeParseError),
}
