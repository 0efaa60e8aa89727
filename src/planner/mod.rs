//! Execution planning
//!
//! Turns a PRD into an ordered, phased plan:
//! - Topological execution order (Kahn's algorithm)
//! - Critical path weighted by story complexity
//! - Sequential phases whose stories can run in parallel
//! - Groups of stories with identical dependency sets
//! - Recommendations derived from all of the above
//!
//! Planning assumes the document already passed validation. Cyclic or
//! dangling dependencies do not fail the planner, but the resulting order
//! is a best-effort fallback.

mod ordering;
mod phases;
mod recommendations;
mod types;


use std::collections::HashMap;

use crate::config::PlannerConfig;
use crate::prd::{DependencyGraph, DocumentError, PrdDocument, StoryRecord};

pub use types::{complexity_tier, ExecutionPhase, ExecutionPlan};

use recommendations::PlanFacts;
use types::StoryMeta;

/// Stateless execution planner. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct ExecutionPlanner {
    config: PlannerConfig,
}

impl ExecutionPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a PRD. Never fails: unusable input yields an empty plan with a
    /// single recommendation explaining why.
    pub fn plan(&self, prd_json: &str) -> ExecutionPlan {
        let document = match PrdDocument::parse(prd_json) {
            Ok(document) => document,
            Err(DocumentError::InvalidJson(_)) => {
                return ExecutionPlan::empty("Error: Invalid JSON format");
            }
            Err(DocumentError::NotAnObject) => {
                return ExecutionPlan::empty("Error: PRD must be a JSON object");
            }
        };

        let records = document.story_records();
        if records.is_empty() {
            return ExecutionPlan::empty("No user stories found in PRD");
        }

        let graph = DependencyGraph::build(&records);
        let meta = self.story_meta(&records);

        let execution_order = ordering::topological_order(&graph);
        let (critical_path, critical_path_length) =
            ordering::critical_path(&graph, &execution_order, &meta);
        let phases = phases::build_phases(&graph, &meta, self.config.default_priority);
        let parallelization_opportunities = phases::parallel_groups(&graph);

        let recommendations = recommendations::recommend(
            &PlanFacts {
                records: &records,
                graph: &graph,
                meta: &meta,
                phases: &phases,
                critical_path: &critical_path,
                parallel_groups: &parallelization_opportunities,
            },
            &self.config,
        );

        tracing::debug!(
            stories = graph.len(),
            phases = phases.len(),
            critical_path_length,
            "planned execution"
        );

        ExecutionPlan {
            execution_order,
            phases,
            critical_path,
            critical_path_length,
            parallelization_opportunities,
            recommendations,
        }
    }

    /// Per-story planning attributes. A repeated id takes its last record.
    fn story_meta(&self, records: &[StoryRecord]) -> HashMap<String, StoryMeta> {
        records
            .iter()
            .filter_map(|record| {
                let id = record.id.clone()?;
                let meta = StoryMeta {
                    repo: record.repo.clone().unwrap_or_default(),
                    priority: record.priority.unwrap_or(self.config.default_priority),
                    complexity: complexity_tier(record.criteria_count()),
                };
                Some((id, meta))
            })
            .collect()
    }
}
