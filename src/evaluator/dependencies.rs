//! Dependency structure scoring: coupling, bottlenecks, parallel starts, depth

use super::types::{CategoryScore, QualityCategory, QualityIssue};
use crate::config::EvaluatorConfig;
use crate::prd::graph::max_depth;
use crate::prd::{DependencyGraph, StoryRecord};

pub(crate) fn evaluate(records: &[StoryRecord], config: &EvaluatorConfig) -> (u32, Vec<QualityIssue>) {
    let mut score = CategoryScore::new(QualityCategory::Dependencies);
    let graph = DependencyGraph::build(records);

    for record in records {
        let count = record.dependencies.len();
        if count > config.max_dependencies {
            score.deduct(
                10.0,
                record.id.as_deref(),
                format!("Story has {count} dependencies - too many"),
                "Consider breaking into smaller stories or reducing coupling between stories",
            );
        }
    }

    for (id, dependents) in graph.dependents_by_id() {
        if dependents.len() > config.bottleneck_dependents {
            score.deduct(
                8.0,
                Some(id),
                format!(
                    "Story is a bottleneck - {} other stories depend on it",
                    dependents.len()
                ),
                "Consider splitting this story or implementing it early in the sprint",
            );
        }
    }

    let roots = graph.roots().count();
    if roots == 0 && records.len() > 1 {
        score.deduct(
            15.0,
            None,
            "No stories can run in parallel - all have dependencies",
            "Design some stories to be independent for parallel execution by different agents",
        );
    } else if roots == 1 && records.len() > 3 {
        score.deduct(
            8.0,
            None,
            "Limited parallelization - only 1 story can start independently",
            "Consider redesigning dependencies to allow more parallel work",
        );
    }

    let depth = max_depth(&graph);
    if depth > config.max_dependency_depth {
        score.deduct(
            10.0,
            None,
            format!("Deep dependency chain (depth: {depth})"),
            "Long chains increase risk. Consider flattening the dependency structure.",
        );
    }

    score.finish()
}
