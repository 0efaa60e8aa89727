//! Clarity scoring: titles, descriptions and acceptance criteria

use std::sync::LazyLock;

use regex::Regex;

use super::types::{CategoryScore, QualityCategory, QualityIssue};
use crate::config::EvaluatorConfig;
use crate::prd::StoryRecord;

/// "As a <user> ... I want", or a title starting with an imperative verb.
static USER_STORY_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"as an?.*i want|^(?:add|create|implement|update|fix)\s")
        .expect("Invalid user story pattern")
});

pub fn is_user_story_format(title: &str) -> bool {
    USER_STORY_SHAPE.is_match(&title.to_lowercase())
}

pub(crate) fn evaluate(records: &[StoryRecord], config: &EvaluatorConfig) -> (u32, Vec<QualityIssue>) {
    let mut score = CategoryScore::new(QualityCategory::Clarity);
    let points_per_story = 100.0 / records.len().max(1) as f64;

    for record in records {
        let story_id = Some(record.id.as_deref().unwrap_or("unknown"));

        let title_len = record.title.chars().count();
        if title_len < config.min_title_length {
            score.deduct(
                (points_per_story * 0.15).min(5.0),
                story_id,
                format!("Title is too short ({title_len} chars)"),
                format!(
                    "Use descriptive titles of at least {} characters that explain the user goal",
                    config.min_title_length
                ),
            );
        }

        if !is_user_story_format(&record.title) {
            score.deduct(
                (points_per_story * 0.1).min(3.0),
                story_id,
                "Title doesn't follow user story format",
                "Consider using format: 'As a [user], I want [goal] so that [benefit]'",
            );
        }

        let description_len = record.description.chars().count();
        if description_len < config.min_description_length {
            score.deduct(
                (points_per_story * 0.25).min(10.0),
                story_id,
                format!("Description lacks detail ({description_len} chars)"),
                format!(
                    "Include context, user persona, expected behavior, and edge cases. Aim for at least {} characters.",
                    config.min_description_length
                ),
            );
        }

        let criteria_count = record.criteria_count();
        if criteria_count < config.min_criteria_count {
            score.deduct(
                (points_per_story * 0.25).min(10.0),
                story_id,
                format!("Insufficient acceptance criteria ({criteria_count} criteria)"),
                format!(
                    "Include at least {} specific, testable criteria per story",
                    config.min_criteria_count
                ),
            );
        }

        for (position, criterion) in record.acceptance_criteria.iter().enumerate() {
            let Some(criterion) = criterion else {
                continue;
            };
            if criterion.chars().count() < config.min_criterion_length {
                score.deduct(
                    (points_per_story * 0.08).min(3.0),
                    story_id,
                    format!("Acceptance criterion {} is vague", position + 1),
                    "Make criteria specific and testable with clear success conditions",
                );
            }
        }
    }

    score.finish()
}
