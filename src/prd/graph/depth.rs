//! Dependency chain depth

use std::collections::{HashMap, HashSet};

use super::DependencyGraph;

struct Frame<'a> {
    node: &'a str,
    next: usize,
    deepest: usize,
}

/// Length, in edges, of the longest dependency chain in the graph.
///
/// A story with no dependencies has depth 0; otherwise its depth is one more
/// than its deepest dependency. Results are memoized across start nodes. A
/// node already on the current path contributes 0, so cyclic input
/// terminates with a finite answer.
pub fn max_depth(graph: &DependencyGraph) -> usize {
    let mut memo: HashMap<&str, usize> = HashMap::new();

    graph
        .ids()
        .iter()
        .map(|id| depth_from(graph, id, &mut memo))
        .max()
        .unwrap_or(0)
}

/// Depth known without descending, if any.
fn settled(
    graph: &DependencyGraph,
    node: &str,
    memo: &HashMap<&str, usize>,
    on_path: &HashSet<&str>,
) -> Option<usize> {
    if let Some(&depth) = memo.get(node) {
        return Some(depth);
    }
    if on_path.contains(node) || graph.dependencies(node).is_empty() {
        return Some(0);
    }
    None
}

fn depth_from<'a>(
    graph: &'a DependencyGraph,
    start: &'a str,
    memo: &mut HashMap<&'a str, usize>,
) -> usize {
    let mut on_path: HashSet<&str> = HashSet::new();
    if let Some(depth) = settled(graph, start, memo, &on_path) {
        return depth;
    }

    on_path.insert(start);
    let mut stack = vec![Frame {
        node: start,
        next: 0,
        deepest: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        if let Some(dep) = graph.dependencies(frame.node).get(frame.next) {
            frame.next += 1;
            let dep = dep.as_str();
            match settled(graph, dep, memo, &on_path) {
                Some(depth) => frame.deepest = frame.deepest.max(depth),
                None => {
                    on_path.insert(dep);
                    stack.push(Frame {
                        node: dep,
                        next: 0,
                        deepest: 0,
                    });
                }
            }
            continue;
        }

        let depth = frame.deepest + 1;
        let node = frame.node;
        stack.pop();
        on_path.remove(node);
        memo.insert(node, depth);

        match stack.last_mut() {
            Some(parent) => parent.deepest = parent.deepest.max(depth),
            None => return depth,
        }
    }

    0
}
