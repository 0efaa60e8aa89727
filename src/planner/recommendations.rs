//! Natural-language recommendations derived from a finished plan

use std::collections::HashMap;

use super::types::{ExecutionPhase, StoryMeta};
use crate::config::PlannerConfig;
use crate::prd::{DependencyGraph, StoryRecord};

/// Everything the recommendation rules look at
pub(crate) struct PlanFacts<'a> {
    pub records: &'a [StoryRecord],
    pub graph: &'a DependencyGraph,
    pub meta: &'a HashMap<String, StoryMeta>,
    pub phases: &'a [ExecutionPhase],
    pub critical_path: &'a [String],
    pub parallel_groups: &'a [Vec<String>],
}

/// Recommendations in a fixed order; each appears only when its trigger holds.
pub(crate) fn recommend(facts: &PlanFacts<'_>, config: &PlannerConfig) -> Vec<String> {
    let rules = [
        critical_path(facts, config),
        starting_points(facts, config),
        parallel_execution(facts),
        bottlenecks(facts, config),
        workload(facts, config),
        phase_count(facts, config),
        quick_wins(facts, config),
    ];

    rules.into_iter().flatten().collect()
}

fn critical_path(facts: &PlanFacts<'_>, config: &PlannerConfig) -> Option<String> {
    if facts.critical_path.is_empty() {
        return None;
    }

    let preview = facts
        .critical_path
        .iter()
        .take(config.critical_path_preview)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" -> ");
    let ellipsis = if facts.critical_path.len() > config.critical_path_preview {
        "..."
    } else {
        ""
    };

    Some(format!(
        "CRITICAL PATH: {} stories form the longest chain. Prioritize: {preview}{ellipsis}",
        facts.critical_path.len()
    ))
}

fn starting_points(facts: &PlanFacts<'_>, config: &PlannerConfig) -> Option<String> {
    let first = facts.phases.first().filter(|p| !p.stories.is_empty())?;
    let start = first
        .stories
        .iter()
        .take(config.recommendation_limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    Some(format!("START WITH: {start} - these have no dependencies"))
}

fn parallel_execution(facts: &PlanFacts<'_>) -> Option<String> {
    if facts.parallel_groups.is_empty() {
        return None;
    }

    let total: usize = facts.parallel_groups.iter().map(Vec::len).sum();
    Some(format!(
        "PARALLEL EXECUTION: {} groups ({total} stories total) can run simultaneously. Consider scaling agents.",
        facts.parallel_groups.len()
    ))
}

fn bottlenecks(facts: &PlanFacts<'_>, config: &PlannerConfig) -> Option<String> {
    let mut candidates: Vec<(&str, usize)> = facts
        .graph
        .dependents_by_id()
        .map(|(id, dependents)| (id, dependents.len()))
        .filter(|(_, count)| *count >= config.bottleneck_dependents)
        .collect();
    if candidates.is_empty() {
        return None;
    }

    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    let listed = candidates
        .iter()
        .take(config.recommendation_limit)
        .map(|(id, count)| format!("{id}({count} dependents)"))
        .collect::<Vec<_>>()
        .join(", ");

    Some(format!(
        "BOTTLENECKS: {listed} - prioritize these to unblock other work"
    ))
}

fn workload(facts: &PlanFacts<'_>, config: &PlannerConfig) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for record in facts.records {
        let repo = record.repo.as_deref().unwrap_or("unknown");
        match counts.iter_mut().find(|(name, _)| *name == repo) {
            Some((_, count)) => *count += 1,
            None => counts.push((repo, 1)),
        }
    }

    // first repo with the highest count
    let (repo, count) = counts
        .into_iter()
        .fold(None, |best: Option<(&str, usize)>, entry| match best {
            Some(b) if b.1 >= entry.1 => Some(b),
            _ => Some(entry),
        })?;

    let total = facts.records.len();
    if count as f64 <= total as f64 * config.workload_share {
        return None;
    }

    Some(format!(
        "WORKLOAD: '{repo}' codebase has {count}/{total} stories. Consider assigning multiple agents to this codebase."
    ))
}

fn phase_count(facts: &PlanFacts<'_>, config: &PlannerConfig) -> Option<String> {
    let phases = facts.phases.len();
    let stories = facts.records.len();

    if phases > config.max_phases {
        Some(format!(
            "OPTIMIZATION: {phases} sequential phases detected. Consider reducing dependencies to allow more parallel execution."
        ))
    } else if phases <= config.efficient_phases && stories > config.efficient_min_stories {
        Some(format!(
            "EFFICIENT: Only {phases} phases for {stories} stories - good parallelization potential."
        ))
    } else {
        None
    }
}

fn quick_wins(facts: &PlanFacts<'_>, config: &PlannerConfig) -> Option<String> {
    let wins: Vec<&str> = facts
        .graph
        .ids()
        .iter()
        .map(String::as_str)
        .filter(|id| {
            facts.meta.get(*id).is_some_and(|m| m.complexity == 1)
                && facts.graph.dependents(id).is_empty()
        })
        .take(config.recommendation_limit)
        .collect();
    if wins.is_empty() {
        return None;
    }

    Some(format!(
        "QUICK WINS: {} are low complexity with no dependents - good candidates for early completion",
        wins.join(", ")
    ))
}
