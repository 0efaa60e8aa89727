//! Story representations: a lossy record for scoring and planning, and a
//! strict typed story for documents that passed validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A story as read from an arbitrary JSON value.
///
/// Missing or mistyped fields fall back to empty values instead of failing,
/// so scoring and planning can run over structurally incomplete documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryRecord {
    /// Position in `userStories`
    pub index: usize,
    /// Story id; `None` when absent, empty, or not a string
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub repo: Option<String>,
    /// Acceptance criteria in order; non-string entries are kept as `None`
    /// so counts and positions stay faithful to the document.
    pub acceptance_criteria: Vec<Option<String>>,
    /// Integer priority, if one was given
    pub priority: Option<i64>,
    /// String dependency ids; a non-list value reads as no dependencies
    pub dependencies: Vec<String>,
}

impl StoryRecord {
    pub fn from_value(index: usize, value: &Value) -> Self {
        let Some(story) = value.as_object() else {
            return Self {
                index,
                ..Self::default()
            };
        };

        let text = |field: &str| {
            story
                .get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let acceptance_criteria = match story.get("acceptanceCriteria") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };

        let dependencies = match story.get("dependencies") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        Self {
            index,
            id: story
                .get("id")
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
            title: text("title"),
            description: text("description"),
            repo: story.get("repo").and_then(Value::as_str).map(str::to_string),
            acceptance_criteria,
            priority: story.get("priority").and_then(Value::as_i64),
            dependencies,
        }
    }

    pub fn criteria_count(&self) -> usize {
        self.acceptance_criteria.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoryConversionError {
    #[error("story at index {index} has no usable '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("story '{id}' has a non-string acceptance criterion at position {position}")]
    NonStringCriterion { id: String, position: usize },
}

/// A fully-typed story. Only produced from documents that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub title: String,
    pub description: String,
    pub repo: String,
    pub acceptance_criteria: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl TryFrom<&StoryRecord> for Story {
    type Error = StoryConversionError;

    fn try_from(record: &StoryRecord) -> Result<Self, Self::Error> {
        let id = record.id.clone().ok_or(StoryConversionError::MissingField {
            index: record.index,
            field: "id",
        })?;
        let repo = record.repo.clone().ok_or(StoryConversionError::MissingField {
            index: record.index,
            field: "repo",
        })?;

        let acceptance_criteria = record
            .acceptance_criteria
            .iter()
            .enumerate()
            .map(|(position, criterion)| {
                criterion
                    .clone()
                    .ok_or_else(|| StoryConversionError::NonStringCriterion {
                        id: id.clone(),
                        position,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id,
            title: record.title.clone(),
            description: record.description.clone(),
            repo,
            acceptance_criteria,
            priority: record.priority,
            dependencies: record.dependencies.clone(),
        })
    }
}
