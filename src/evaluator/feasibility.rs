//! Feasibility scoring: scope creep, story size, vague wording, complexity mix

use serde::{Deserialize, Serialize};

use super::types::{CategoryScore, QualityCategory, QualityIssue};
use crate::config::{ComplexityKeywords, EvaluatorConfig};
use crate::prd::StoryRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    High,
    Medium,
    Low,
}

/// Classify text by keyword; a high match wins over medium, anything else is low.
pub fn estimate_complexity(text: &str, keywords: &ComplexityKeywords) -> Complexity {
    let text = text.to_lowercase();
    if keywords.high.iter().any(|k| text.contains(k.as_str())) {
        Complexity::High
    } else if keywords.medium.iter().any(|k| text.contains(k.as_str())) {
        Complexity::Medium
    } else {
        Complexity::Low
    }
}

fn first_match<'a>(text: &str, terms: &'a [String]) -> Option<&'a str> {
    terms
        .iter()
        .map(String::as_str)
        .find(|term| text.contains(term))
}

pub(crate) fn evaluate(records: &[StoryRecord], config: &EvaluatorConfig) -> (u32, Vec<QualityIssue>) {
    let mut score = CategoryScore::new(QualityCategory::Feasibility);
    let mut high_complexity = 0usize;
    let mut total_criteria = 0usize;

    for record in records {
        let story_id = record.id.as_deref();
        let full_text = format!("{} {}", record.title, record.description).to_lowercase();

        if let Some(keyword) = first_match(&full_text, &config.scope_creep_keywords) {
            score.deduct(
                5.0,
                story_id,
                format!("Possible scope creep detected ('{keyword}')"),
                "Split into multiple focused stories for cleaner implementation",
            );
        }

        if estimate_complexity(&full_text, &config.complexity_keywords) == Complexity::High {
            high_complexity += 1;
        }

        let criteria = record.criteria_count();
        total_criteria += criteria;
        if criteria > config.max_criteria_per_story {
            score.deduct(
                10.0,
                story_id,
                format!("Story is too large ({criteria} acceptance criteria)"),
                "Break into smaller, focused stories of 3-6 criteria each",
            );
        }

        if let Some(term) = first_match(&full_text, &config.vague_terms) {
            score.deduct(
                3.0,
                story_id,
                format!("Vague requirement term detected ('{term}')"),
                "Be specific about all requirements to avoid implementation ambiguity",
            );
        }
    }

    if high_complexity as f64 > records.len() as f64 * 0.5 {
        score.deduct(
            10.0,
            None,
            "High concentration of complex stories",
            "Consider breaking down complex stories or spreading them across sprints",
        );
    }

    let average = total_criteria as f64 / records.len().max(1) as f64;
    if average > config.max_average_criteria {
        score.deduct(
            8.0,
            None,
            format!("High average acceptance criteria per story ({average:.1})"),
            "Stories with many criteria are harder to implement. Aim for 3-5 criteria per story.",
        );
    }

    score.finish()
}
