//! First stage of PRD decoding: JSON text to a loosely-typed object.

use serde_json::{Map, Value};
use thiserror::Error;

use super::story::StoryRecord;

/// Top-level field holding the ordered story list.
pub const STORIES_FIELD: &str = "userStories";

/// Optional top-level fields every complete PRD should carry.
pub const RECOMMENDED_FIELDS: &[&str] = &["project", "feature", "branchName", "repos"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("PRD must be a JSON object")]
    NotAnObject,
}

/// A decoded PRD whose root is known to be a JSON object.
///
/// Nothing beneath the root is checked here. Unknown fields are kept and
/// ignored, so every consumer decides for itself how strict to be.
#[derive(Debug, Clone)]
pub struct PrdDocument {
    root: Map<String, Value>,
}

impl PrdDocument {
    pub fn parse(prd_json: &str) -> Result<Self, DocumentError> {
        let value: Value =
            serde_json::from_str(prd_json).map_err(|e| DocumentError::InvalidJson(e.to_string()))?;

        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(DocumentError::NotAnObject),
        }
    }

    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.root.get(name)
    }

    /// The raw `userStories` entries, or an empty slice when the field is
    /// missing or not a list.
    pub fn raw_stories(&self) -> &[Value] {
        match self.root.get(STORIES_FIELD) {
            Some(Value::Array(stories)) => stories,
            _ => &[],
        }
    }

    /// Lossy records for every story entry, in document order.
    pub fn story_records(&self) -> Vec<StoryRecord> {
        self.raw_stories()
            .iter()
            .enumerate()
            .map(|(index, value)| StoryRecord::from_value(index, value))
            .collect()
    }
}
