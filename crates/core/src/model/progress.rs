use serde::{Deserialize, Deserializer, Serialize};

use crate::model::Topic;

/// Server-owned snapshot of a learner's completion state.
///
/// The client never edits this; every mutating call returns a fresh snapshot
/// that replaces the previous one wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub user_id: String,
    #[serde(default, deserialize_with = "optional_topic")]
    pub current_topic: Option<Topic>,
    #[serde(default, deserialize_with = "topic_list")]
    pub completed_topics: Vec<Topic>,
    #[serde(default, deserialize_with = "optional_topic")]
    pub next_topic: Option<Topic>,
}

impl Progress {
    #[must_use]
    pub fn is_completed(&self, topic: &Topic) -> bool {
        self.completed_topics.contains(topic)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_topics.len()
    }
}

// Blank or null topics from the backend mean "none".
fn optional_topic<'de, D>(deserializer: D) -> Result<Option<Topic>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| Topic::new(value).ok()))
}

fn topic_list<'de, D>(deserializer: D) -> Result<Vec<Topic>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| Topic::new(value).ok())
        .collect())
}
