//! Cycle detection for the dependency graph

use std::collections::HashSet;

use super::DependencyGraph;

/// Find every cycle reachable by depth-first search.
///
/// Each cycle is an id chain that closes back on its first element, e.g.
/// `["A", "B", "C", "A"]`. Traversal starts from each unvisited id in
/// document order and follows dependencies in declaration order, so the
/// result is deterministic. The search keeps an explicit stack instead of
/// recursing; chains of hundreds of stories are ordinary input.
pub fn find_cycles(graph: &DependencyGraph) -> Vec<Vec<String>> {
    let mut cycles = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();

    for start in graph.ids() {
        if visited.contains(start.as_str()) {
            continue;
        }

        // (node, index of the next dependency to follow); the stack is the
        // current path
        let mut stack: Vec<(&str, usize)> = vec![(start.as_str(), 0)];
        let mut on_path: HashSet<&str> = HashSet::from([start.as_str()]);
        visited.insert(start.as_str());

        while let Some(&(node, next)) = stack.last() {
            let Some(dep) = graph.dependencies(node).get(next) else {
                stack.pop();
                on_path.remove(node);
                continue;
            };

            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }

            let dep = dep.as_str();
            if !visited.contains(dep) {
                visited.insert(dep);
                on_path.insert(dep);
                stack.push((dep, 0));
            } else if on_path.contains(dep) {
                if let Some(begin) = stack.iter().position(|(id, _)| *id == dep) {
                    let mut cycle: Vec<String> =
                        stack[begin..].iter().map(|(id, _)| id.to_string()).collect();
                    cycle.push(dep.to_string());
                    cycles.push(cycle);
                }
            }
        }
    }

    cycles
}
