use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Learner identifier as sent to the backend (an email or a username).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(pub(crate) String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserIdError {
    #[error("user id cannot be empty")]
    Empty,
}

impl UserId {
    /// Creates a validated `UserId` (trimmed, non-empty).
    ///
    /// # Errors
    ///
    /// Returns `UserIdError::Empty` if the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, UserIdError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UserIdError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_trims_input() {
        let id = UserId::new("  student@example.com ").unwrap();
        assert_eq!(id.as_str(), "student@example.com");
    }

    #[test]
    fn test_user_id_rejects_blank() {
        assert_eq!(UserId::new("   "), Err(UserIdError::Empty));
        assert!("".parse::<UserId>().is_err());
    }

    #[test]
    fn test_user_id_display() {
        let id: UserId = "ada".parse().unwrap();
        assert_eq!(id.to_string(), "ada");
        assert_eq!(format!("{id:?}"), "UserId(ada)");
    }

    #[test]
    fn test_user_id_serializes_as_plain_string() {
        let id = UserId::new("ada").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"ada\"");
        assert!(serde_json::from_str::<UserId>("\" \"").is_err());
    }
}
