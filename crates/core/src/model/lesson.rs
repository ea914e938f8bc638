use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::model::Topic;

/// Generated lesson for one topic/language pair. Read-only to the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub topic: Topic,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub overview: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub pseudocode: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub code: Option<String>,
    #[serde(default)]
    pub practice: Option<Practice>,
    #[serde(default, deserialize_with = "optional_text")]
    pub complexity_note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practice {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub prompt: String,
    #[serde(default, deserialize_with = "first_example")]
    pub examples: Option<PracticeExample>,
}

/// One input/output pair for a practice problem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeExample {
    #[serde(rename = "in", default, deserialize_with = "display_text")]
    pub input: String,
    #[serde(rename = "out", default, deserialize_with = "display_text")]
    pub output: String,
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a single pair or a list of pairs (first one wins). Any other shape
/// only hides the example line.
fn first_example<'de, D>(deserializer: D) -> Result<Option<PracticeExample>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().next(),
        other @ Value::Object(_) => Some(other),
        _ => None,
    };
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

// Generators sometimes emit arrays or numbers for examples; show them as JSON.
fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
