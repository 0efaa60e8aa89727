//! Shared test helpers for building PRD documents

use proptest::prelude::*;
use serde_json::{json, Value};

/// A story that passes every validator check
pub fn valid_story(id: &str, repo: &str, criteria: usize, deps: &[&str]) -> Value {
    json!({
        "id": id,
        "title": format!("Implement feature for story {id}"),
        "description": format!("Detailed description for story {id} covering the expected behavior."),
        "repo": repo,
        "acceptanceCriteria": (1..=criteria)
            .map(|n| format!("Acceptance criterion number {n}"))
            .collect::<Vec<_>>(),
        "priority": 5,
        "dependencies": deps,
    })
}

/// A PRD with every recommended field set
pub fn prd_json(stories: Vec<Value>) -> String {
    json!({
        "project": "Storefront",
        "feature": "Checkout",
        "branchName": "feature/checkout",
        "repos": ["backend", "web"],
        "userStories": stories,
    })
    .to_string()
}

/// `(id, criteria count, dependency ids)` per story, in document order
pub type Dag = Vec<(String, usize, Vec<String>)>;

/// Criteria count and raw dependency picks for one story
fn arb_story_shape() -> impl Strategy<Value = (usize, Vec<prop::sample::Index>)> {
    (1usize..=9, prop::collection::vec(any::<prop::sample::Index>(), 0..4))
}

/// An acyclic story graph in shuffled document order.
///
/// Story `S{i}` only depends on stories with a smaller index. Picks are not
/// deduplicated, so the same dependency may be listed more than once.
pub fn arb_dag(min_size: usize, max_size: usize) -> impl Strategy<Value = Dag> {
    prop::collection::vec(arb_story_shape(), min_size..=max_size)
        .prop_map(|shapes| {
            shapes
                .into_iter()
                .enumerate()
                .map(|(i, (criteria, picks))| {
                    let deps = if i == 0 {
                        Vec::new()
                    } else {
                        picks.iter().map(|p| format!("S{}", p.index(i))).collect()
                    };
                    (format!("S{i}"), criteria, deps)
                })
                .collect::<Dag>()
        })
        .prop_shuffle()
}

pub fn dag_prd(dag: &[(String, usize, Vec<String>)]) -> String {
    let repos = ["backend", "web", "api"];
    let stories = dag
        .iter()
        .enumerate()
        .map(|(i, (id, criteria, deps))| {
            let deps: Vec<&str> = deps.iter().map(String::as_str).collect();
            valid_story(id, repos[i % repos.len()], *criteria, &deps)
        })
        .collect();
    prd_json(stories)
}
