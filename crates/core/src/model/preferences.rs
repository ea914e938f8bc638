use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::model::{Language, UserId};

pub const DEFAULT_USER_ID: &str = "student@example.com";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("unknown theme: {raw}")]
pub struct ThemeParseError {
    raw: String,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeParseError { raw: s.to_string() }),
        }
    }
}

/// Learner-local client preferences, restored on the next launch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    user_id: UserId,
    language: Language,
    theme: Theme,
}

#[derive(Clone, Debug, Default)]
pub struct PreferencesDraft {
    pub user_id: Option<String>,
    pub language: Option<String>,
    pub theme: Option<String>,
}

impl PreferencesDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns `Error` if a present field cannot be parsed.
    pub fn validate(self) -> Result<Preferences, Error> {
        let user_id = match normalize_optional(self.user_id) {
            Some(raw) => UserId::new(raw)?,
            None => default_user_id(),
        };
        let language: Language = match normalize_optional(self.language) {
            Some(raw) => raw.parse()?,
            None => Language::default(),
        };
        let theme: Theme = match normalize_optional(self.theme) {
            Some(raw) => raw.parse()?,
            None => Theme::default(),
        };

        Ok(Preferences {
            user_id,
            language,
            theme,
        })
    }
}

impl Preferences {
    #[must_use]
    pub fn new(user_id: UserId, language: Language, theme: Theme) -> Self {
        Self {
            user_id,
            language,
            theme,
        }
    }

    /// Rebuild preferences from stored column values.
    ///
    /// # Errors
    ///
    /// Returns `Error` if a stored value is no longer valid.
    pub fn from_persisted(user_id: String, language: String, theme: String) -> Result<Self, Error> {
        PreferencesDraft {
            user_id: Some(user_id),
            language: Some(language),
            theme: Some(theme),
        }
        .validate()
    }

    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            language: Language::default(),
            theme: Theme::default(),
        }
    }
}

fn default_user_id() -> UserId {
    UserId(DEFAULT_USER_ID.to_string())
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
