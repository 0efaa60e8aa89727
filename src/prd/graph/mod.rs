//! Story dependency graph

mod cycle;
mod depth;


use std::collections::HashMap;

use super::story::StoryRecord;

pub use cycle::find_cycles;
pub use depth::max_depth;

/// Dependency graph derived from a story list.
///
/// An edge from A to B means "A depends on B". Node order is the order in
/// which ids first appear in the document; algorithms that need a tie-break
/// use it. A repeated id keeps its first position but takes the
/// dependencies of its last occurrence.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Story ids in first-seen document order
    order: Vec<String>,
    /// Map from story id to the ids it depends on
    forward: HashMap<String, Vec<String>>,
    /// Map from an id to the stories that depend on it. Keys may be ids
    /// that no story defines.
    reverse: HashMap<String, Vec<String>>,
    /// Keys of `reverse` in first-seen order
    reverse_order: Vec<String>,
}

impl DependencyGraph {
    /// Build the forward and reverse graphs from story records.
    ///
    /// Records without an id are not part of the graph.
    pub fn build(records: &[StoryRecord]) -> Self {
        let mut graph = Self::default();

        for record in records {
            let Some(id) = &record.id else {
                continue;
            };

            if !graph.forward.contains_key(id) {
                graph.order.push(id.clone());
            }
            graph
                .forward
                .insert(id.clone(), record.dependencies.clone());

            for dep in &record.dependencies {
                if !graph.reverse.contains_key(dep) {
                    graph.reverse_order.push(dep.clone());
                }
                graph
                    .reverse
                    .entry(dep.clone())
                    .or_default()
                    .push(id.clone());
            }
        }

        graph
    }

    /// Story ids in document order
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.forward.contains_key(id)
    }

    /// Ids this story depends on; empty for unknown ids
    pub fn dependencies(&self, id: &str) -> &[String] {
        self.forward.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Ids of stories that depend on this one
    pub fn dependents(&self, id: &str) -> &[String] {
        self.reverse.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every depended-upon id with its dependents, in first-seen order.
    pub fn dependents_by_id(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.reverse_order
            .iter()
            .map(|id| (id.as_str(), self.dependents(id)))
    }

    /// Stories with no dependencies at all
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter(|id| self.dependencies(id).is_empty())
            .map(String::as_str)
    }
}
