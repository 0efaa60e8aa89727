//! Graph-level checks: dangling references, cycles, chain depth

use serde_json::Value;

use super::types::{Findings, IssueCode};
use crate::config::ValidatorConfig;
use crate::prd::graph::{find_cycles, max_depth};
use crate::prd::{DependencyGraph, StoryRecord};

const GRAPH_PATH: &str = "$.userStories.dependencies";

pub(crate) fn check_dependencies(
    stories: &[Value],
    records: &[StoryRecord],
    config: &ValidatorConfig,
    findings: &mut Findings,
) {
    let graph = DependencyGraph::build(records);

    for (index, story) in stories.iter().enumerate() {
        let Some(Value::Array(deps)) = story.get("dependencies") else {
            continue;
        };
        let story_id = story.get("id").map(display_id).unwrap_or_default();

        for dep in deps {
            let known = dep.as_str().is_some_and(|id| graph.contains(id));
            if !known {
                findings.error(
                    &format!("$.userStories[{index}].dependencies"),
                    IssueCode::MissingDependency,
                    format!(
                        "Story '{story_id}' depends on '{}' which does not exist",
                        display_id(dep)
                    ),
                );
            }
        }
    }

    let cycles = find_cycles(&graph);
    if !cycles.is_empty() {
        tracing::debug!(count = cycles.len(), "circular dependencies found");
    }
    for cycle in cycles {
        findings.error(
            GRAPH_PATH,
            IssueCode::CircularDependency,
            format!("Circular dependency detected: {}", cycle.join(" -> ")),
        );
    }

    let depth = max_depth(&graph);
    if depth > config.max_dependency_depth {
        findings.warning(
            GRAPH_PATH,
            IssueCode::DeepDependencyChain,
            format!("Dependency chain depth is {depth}. Consider flattening dependencies."),
        );
    }
}

/// Render an id-like value for messages: strings bare, anything else as JSON.
fn display_id(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
