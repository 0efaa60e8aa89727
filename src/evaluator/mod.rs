//! PRD quality scoring
//!
//! Scores a PRD on a 0-100 scale across three weighted categories:
//! - Clarity: title, description and acceptance criteria quality
//! - Dependencies: coupling, bottlenecks and parallel start potential
//! - Feasibility: scope creep, story size and complexity mix
//!
//! Each category starts at 100 and loses points per finding; the final
//! score is the weighted sum, and the grade is derived from that score.

mod clarity;
mod dependencies;
mod feasibility;
mod types;


use crate::config::EvaluatorConfig;
use crate::prd::{DocumentError, PrdDocument};

pub use clarity::is_user_story_format;
pub use feasibility::{estimate_complexity, Complexity};
pub use types::{Grade, QualityBreakdown, QualityCategory, QualityIssue, QualityReport};

use types::round_half_even;

/// Stateless PRD quality evaluator. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct QualityEvaluator {
    config: EvaluatorConfig,
}

impl QualityEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Score a PRD. Never fails: unusable input scores 0 with grade F.
    pub fn evaluate(&self, prd_json: &str) -> QualityReport {
        let document = match PrdDocument::parse(prd_json) {
            Ok(document) => document,
            Err(DocumentError::InvalidJson(_)) => {
                return QualityReport::failed("Invalid JSON format", "Ensure PRD is valid JSON");
            }
            Err(DocumentError::NotAnObject) => {
                return QualityReport::failed(
                    "PRD must be a JSON object",
                    "Wrap the stories in an object with a 'userStories' list",
                );
            }
        };

        let records = document.story_records();
        if records.is_empty() {
            return QualityReport::failed(
                "No user stories found",
                "Add at least one user story to the PRD",
            );
        }

        let (clarity, mut issues) = clarity::evaluate(&records, &self.config);
        let (dependencies, dependency_issues) = dependencies::evaluate(&records, &self.config);
        let (feasibility, feasibility_issues) = feasibility::evaluate(&records, &self.config);
        issues.extend(dependency_issues);
        issues.extend(feasibility_issues);

        let breakdown = QualityBreakdown {
            clarity,
            dependencies,
            feasibility,
        };
        let score = self.weighted_score(&breakdown);

        tracing::debug!(
            stories = records.len(),
            score,
            clarity,
            dependencies,
            feasibility,
            "evaluated PRD quality"
        );

        QualityReport {
            score,
            grade: Grade::from_score(score),
            issues,
            breakdown,
        }
    }

    fn weighted_score(&self, breakdown: &QualityBreakdown) -> u32 {
        let weights = &self.config.weights;
        let weighted = breakdown.clarity * weights.clarity
            + breakdown.dependencies * weights.dependencies
            + breakdown.feasibility * weights.feasibility;
        round_half_even(f64::from(weighted) / 100.0) as u32
    }
}
