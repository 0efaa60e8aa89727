//! Phase grouping and parallel group detection

use std::collections::{BTreeSet, HashMap, HashSet};

use super::types::{ExecutionPhase, StoryMeta};
use crate::prd::DependencyGraph;

/// Partition stories into sequential phases.
///
/// Each phase holds every remaining story whose dependencies were all
/// assigned to earlier phases; a dependency on an unknown id counts as
/// satisfied. Within a phase stories are ordered by priority, then repo,
/// then document order. If nothing is ready (a cycle), the first remaining
/// story is forced through so the loop always makes progress.
pub(crate) fn build_phases(
    graph: &DependencyGraph,
    meta: &HashMap<String, StoryMeta>,
    default_priority: i64,
) -> Vec<ExecutionPhase> {
    let sort_key = |id: &str| {
        meta.get(id)
            .map(|m| (m.priority, m.repo.as_str()))
            .unwrap_or((default_priority, ""))
    };

    let mut remaining: Vec<&str> = graph.ids().iter().map(String::as_str).collect();
    let mut completed: HashSet<&str> = HashSet::new();
    let mut phases = Vec::new();

    while !remaining.is_empty() {
        let mut ready: Vec<&str> = remaining
            .iter()
            .copied()
            .filter(|id| {
                graph
                    .dependencies(id)
                    .iter()
                    .all(|dep| completed.contains(dep.as_str()) || !graph.contains(dep))
            })
            .collect();

        if ready.is_empty() {
            tracing::warn!(
                story = remaining[0],
                "no story is ready; forcing progress past a dependency cycle"
            );
            ready.push(remaining[0]);
        }

        ready.sort_by_key(|id| sort_key(*id));

        let phase_number = phases.len() + 1;
        let rationale = rationale(phase_number, &ready, meta);

        completed.extend(ready.iter().copied());
        remaining.retain(|id| !completed.contains(id));

        phases.push(ExecutionPhase {
            phase_number,
            can_parallelize: ready.len() > 1,
            stories: ready.into_iter().map(str::to_string).collect(),
            rationale,
        });
    }

    tracing::debug!(phases = phases.len(), "built execution phases");
    phases
}

fn rationale(phase_number: usize, ready: &[&str], meta: &HashMap<String, StoryMeta>) -> String {
    if ready.len() <= 1 {
        return format!("Phase {phase_number}: Sequential execution required due to dependencies");
    }

    let repos: BTreeSet<&str> = ready
        .iter()
        .map(|id| meta.get(*id).map_or("", |m| m.repo.as_str()))
        .collect();

    if repos.len() == 1 {
        format!(
            "Phase {phase_number}: {} stories in same codebase can run in parallel",
            ready.len()
        )
    } else {
        format!(
            "Phase {phase_number}: {} stories across {} codebases can run in parallel",
            ready.len(),
            repos.len()
        )
    }
}

/// Groups of two or more stories that share exactly the same dependency set.
///
/// Groups appear in the order their first member appears in the document.
pub(crate) fn parallel_groups(graph: &DependencyGraph) -> Vec<Vec<String>> {
    let mut buckets: Vec<Vec<String>> = Vec::new();
    let mut index: HashMap<Vec<&str>, usize> = HashMap::new();

    for id in graph.ids() {
        let mut key: Vec<&str> = graph.dependencies(id).iter().map(String::as_str).collect();
        key.sort_unstable();

        match index.get(&key) {
            Some(&bucket) => buckets[bucket].push(id.clone()),
            None => {
                index.insert(key, buckets.len());
                buckets.push(vec![id.clone()]);
            }
        }
    }

    buckets.into_iter().filter(|group| group.len() > 1).collect()
}
