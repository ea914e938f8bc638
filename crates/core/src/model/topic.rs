use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Validated curriculum topic name (trimmed, non-empty).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Topic(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("topic name cannot be empty")]
    EmptyName,
}

impl Topic {
    /// Create a validated topic.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::EmptyName` if the name is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TopicError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TopicError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character of the name, used as a visual avatar.
    #[must_use]
    pub fn initial(&self) -> char {
        self.0.chars().next().unwrap_or('?')
    }
}

impl TryFrom<String> for Topic {
    type Error = TopicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Topic> for String {
    fn from(value: Topic) -> Self {
        value.0
    }
}

impl fmt::Debug for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Topic({})", self.0)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const DSA_TOPICS: [&str; 11] = [
    "Introduction to DSA",
    "Arrays & Strings",
    "Linked Lists",
    "Stacks & Queues",
    "Recursion",
    "Trees & Binary Trees",
    "Heaps & Hashing",
    "Graphs",
    "Sorting & Searching Algorithms",
    "Advanced Algorithms",
    "Problem Solving",
];

/// Ordered topic list shown on the roadmap.
///
/// This is only the client's fallback ordering; the backend owns the actual
/// topic graph and decides what comes next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curriculum {
    topics: Vec<Topic>,
}

impl Curriculum {
    /// The built-in DSA sequence.
    #[must_use]
    pub fn dsa() -> Self {
        Self {
            topics: DSA_TOPICS
                .iter()
                .map(|name| Topic(String::from(*name)))
                .collect(),
        }
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Default topic before the backend has said anything.
    #[must_use]
    pub fn first(&self) -> &Topic {
        // `dsa()` is the only constructor and it is never empty.
        &self.topics[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl Default for Curriculum {
    fn default() -> Self {
        Self::dsa()
    }
}
