//! Per-story structural checks

use std::collections::HashSet;

use serde_json::Value;

use super::types::{Findings, IssueCode};
use crate::config::ValidatorConfig;

/// Expected JSON shape of a required story field
#[derive(Debug, Clone, Copy)]
enum FieldKind {
    Text,
    List,
}

impl FieldKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::Text => value.is_string(),
            FieldKind::List => value.is_array(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::List => "array",
        }
    }
}

const REQUIRED_FIELDS: &[(&str, FieldKind)] = &[
    ("id", FieldKind::Text),
    ("title", FieldKind::Text),
    ("description", FieldKind::Text),
    ("repo", FieldKind::Text),
    ("acceptanceCriteria", FieldKind::List),
];

/// Everything a story check needs besides the story itself.
pub(crate) struct StoryContext<'a> {
    pub config: &'a ValidatorConfig,
    pub codebases: &'a [String],
    /// Ids of stories earlier in the document
    pub seen_ids: &'a HashSet<String>,
}

/// Check one story. Returns the story's id when it has a usable one.
pub(crate) fn check_story(
    story: &Value,
    index: usize,
    ctx: &StoryContext<'_>,
    findings: &mut Findings,
) -> Option<String> {
    let path = format!("$.userStories[{index}]");

    let Some(fields) = story.as_object() else {
        findings.error(&path, IssueCode::InvalidStoryType, "Story must be an object");
        return None;
    };

    for (field, kind) in REQUIRED_FIELDS {
        match fields.get(*field) {
            None => findings.error(
                &format!("{path}.{field}"),
                IssueCode::MissingField,
                format!("Story missing required field '{field}'"),
            ),
            Some(value) if !kind.matches(value) => findings.error(
                &format!("{path}.{field}"),
                IssueCode::InvalidType,
                format!("Story field '{field}' must be of type {}", kind.name()),
            ),
            Some(_) => {}
        }
    }

    let story_id = fields
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty());
    if let Some(id) = story_id {
        if ctx.seen_ids.contains(id) {
            findings.error(
                &format!("{path}.id"),
                IssueCode::DuplicateStoryId,
                format!("Duplicate story ID: '{id}'"),
            );
        }
    }

    if let Some(repo) = fields.get("repo").and_then(Value::as_str) {
        if !repo.is_empty() && !ctx.codebases.iter().any(|c| c == repo) {
            findings.error(
                &format!("{path}.repo"),
                IssueCode::InvalidCodebase,
                format!(
                    "Repository '{repo}' not found in valid codebases. Valid options: {}",
                    ctx.codebases.join(", ")
                ),
            );
        }
    }

    // absent criteria read as an empty list; a mistyped value is already an error
    match fields.get("acceptanceCriteria") {
        None => check_criteria(&[], &path, ctx.config, findings),
        Some(Value::Array(criteria)) => check_criteria(criteria, &path, ctx.config, findings),
        Some(_) => {}
    }

    check_priority(fields.get("priority"), &path, ctx.config, findings);

    if let Some(deps) = fields.get("dependencies") {
        if is_truthy(deps) && !deps.is_array() {
            findings.error(
                &format!("{path}.dependencies"),
                IssueCode::InvalidDependenciesType,
                "Dependencies must be an array",
            );
        }
    }

    if let Some(title) = text_or_empty(fields.get("title")) {
        if title.chars().count() < ctx.config.min_title_length {
            findings.warning(
                &format!("{path}.title"),
                IssueCode::ShortTitle,
                "Story title is very short, consider being more descriptive",
            );
        }
    }

    if let Some(description) = text_or_empty(fields.get("description")) {
        if description.chars().count() < ctx.config.min_description_length {
            findings.warning(
                &format!("{path}.description"),
                IssueCode::ShortDescription,
                "Story description is very short, consider adding more context",
            );
        }
    }

    story_id.map(str::to_string)
}

/// The field's text, with an absent field read as empty. `None` for non-strings.
fn text_or_empty(value: Option<&Value>) -> Option<&str> {
    match value {
        None => Some(""),
        Some(value) => value.as_str(),
    }
}

fn check_criteria(criteria: &[Value], path: &str, config: &ValidatorConfig, findings: &mut Findings) {
    if criteria.is_empty() {
        findings.warning(
            &format!("{path}.acceptanceCriteria"),
            IssueCode::EmptyAcceptanceCriteria,
            "Story has no acceptance criteria",
        );
        return;
    }

    for (position, criterion) in criteria.iter().enumerate() {
        let criterion_path = format!("{path}.acceptanceCriteria[{position}]");
        match criterion.as_str() {
            None => findings.error(
                &criterion_path,
                IssueCode::InvalidCriterionType,
                "Acceptance criterion must be a string",
            ),
            Some(text) if text.trim().chars().count() < config.min_criterion_length => {
                findings.warning(
                    &criterion_path,
                    IssueCode::ShortCriterion,
                    "Acceptance criterion is very short, consider adding more detail",
                )
            }
            Some(_) => {}
        }
    }
}

fn check_priority(
    priority: Option<&Value>,
    path: &str,
    config: &ValidatorConfig,
    findings: &mut Findings,
) {
    let Some(priority) = priority.filter(|p| !p.is_null()) else {
        return;
    };

    // widened so integers past i64::MAX land in the range check
    let value = priority
        .as_i64()
        .map(i128::from)
        .or_else(|| priority.as_u64().map(i128::from));
    let range = i128::from(config.priority_min)..=i128::from(config.priority_max);

    match value {
        None => findings.error(
            &format!("{path}.priority"),
            IssueCode::InvalidPriorityType,
            "Priority must be an integer",
        ),
        Some(value) if !range.contains(&value) => findings
            .warning(
                &format!("{path}.priority"),
                IssueCode::PriorityOutOfRange,
                format!(
                    "Priority should be between {} and {}",
                    config.priority_min, config.priority_max
                ),
            ),
        Some(_) => {}
    }
}

/// JSON truthiness: null, false, zero and empty strings/containers are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
