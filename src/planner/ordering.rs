//! Ordering algorithms: topological sort and weighted critical path

use std::collections::{HashMap, HashSet, VecDeque};

use super::types::StoryMeta;
use crate::prd::DependencyGraph;

/// Order stories so that each comes after all of its dependencies.
///
/// Kahn's algorithm seeded with dependency-free stories in document order.
/// A dependency on an id no story defines is never satisfied. When a cycle
/// or such a reference leaves stories unplaced, they are appended in
/// document order instead of failing: rejecting those documents is the
/// validator's job, and callers are expected to validate before planning.
pub(crate) fn topological_order(graph: &DependencyGraph) -> Vec<String> {
    let mut remaining: HashMap<&str, usize> = graph
        .ids()
        .iter()
        .map(|id| {
            // each dependency is released once, however often it is listed
            let distinct: HashSet<&str> =
                graph.dependencies(id).iter().map(String::as_str).collect();
            (id.as_str(), distinct.len())
        })
        .collect();

    let mut queue: VecDeque<&str> = graph
        .ids()
        .iter()
        .map(String::as_str)
        .filter(|id| remaining.get(id) == Some(&0))
        .collect();

    let mut placed: HashSet<&str> = HashSet::new();
    let mut order = Vec::with_capacity(graph.len());

    while let Some(node) = queue.pop_front() {
        placed.insert(node);
        order.push(node.to_string());

        for other in graph.ids() {
            let other = other.as_str();
            if placed.contains(other) || !graph.dependencies(other).iter().any(|d| d == node) {
                continue;
            }
            if let Some(count) = remaining.get_mut(other) {
                if *count > 0 {
                    *count -= 1;
                    if *count == 0 {
                        queue.push_back(other);
                    }
                }
            }
        }
    }

    if order.len() < graph.len() {
        tracing::warn!(
            unplaced = graph.len() - order.len(),
            "dependency graph is not a DAG; appending unresolved stories in document order"
        );
        for id in graph.ids() {
            if !placed.contains(id.as_str()) {
                order.push(id.clone());
            }
        }
    }

    order
}

/// Longest path through the graph, weighting each story by its complexity.
///
/// Returns the path from a root to its end and the summed weight. Distances
/// are relaxed in `order`; ties for the end node go to the first one in
/// `order`, and ties between dependencies to the first declared.
pub(crate) fn critical_path<'a>(
    graph: &'a DependencyGraph,
    order: &'a [String],
    meta: &HashMap<String, StoryMeta>,
) -> (Vec<String>, u32) {
    let weight = |id: &str| meta.get(id).map_or(1, |m| m.complexity);

    let mut dist: HashMap<&str, u32> = graph
        .ids()
        .iter()
        .map(|id| (id.as_str(), weight(id.as_str())))
        .collect();
    let mut parent: HashMap<&str, &str> = HashMap::new();

    for node in order {
        let node = node.as_str();
        let node_weight = weight(node);
        for dep in graph.dependencies(node) {
            let Some(&dep_dist) = dist.get(dep.as_str()) else {
                continue;
            };
            let candidate = dep_dist + node_weight;
            if candidate > dist.get(node).copied().unwrap_or(0) {
                dist.insert(node, candidate);
                parent.insert(node, dep.as_str());
            }
        }
    }

    let mut end: Option<(&str, u32)> = None;
    for node in order {
        let distance = dist.get(node.as_str()).copied().unwrap_or(0);
        if end.map_or(true, |(_, best)| distance > best) {
            end = Some((node.as_str(), distance));
        }
    }

    let Some((end, length)) = end else {
        return (Vec::new(), 0);
    };

    // Back-pointers only form a loop on cyclic input; stop at the first repeat.
    let mut seen: HashSet<&str> = HashSet::from([end]);
    let mut path = vec![end.to_string()];
    let mut current = end;
    while let Some(&previous) = parent.get(current) {
        if !seen.insert(previous) {
            break;
        }
        path.push(previous.to_string());
        current = previous;
    }
    path.reverse();

    (path, length)
}
