//! Graph properties checked over generated PRDs

use std::collections::{HashMap, HashSet};

use prdplan::planner::complexity_tier;
use prdplan::validator::IssueCode;
use prdplan::{Analyzer, ExecutionPlanner, PrdValidator};
use proptest::prelude::*;

use super::helpers::*;

fn heaviest_from(
    id: &str,
    deps: &HashMap<&str, &[String]>,
    weight: &HashMap<&str, u32>,
    memo: &mut HashMap<String, u32>,
) -> u32 {
    if let Some(&known) = memo.get(id) {
        return known;
    }
    let mut below = 0;
    for dep in deps[id] {
        below = below.max(heaviest_from(dep, deps, weight, memo));
    }
    let total = weight[id] + below;
    memo.insert(id.to_string(), total);
    total
}

fn weights(dag: &Dag) -> HashMap<&str, u32> {
    dag.iter()
        .map(|(id, criteria, _)| (id.as_str(), complexity_tier(*criteria)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_generated_dags_validate_cleanly(dag in arb_dag(1, 12)) {
        let report = PrdValidator::default().validate(&dag_prd(&dag), None);
        prop_assert!(report.is_valid, "{:?}", report.errors);
    }

    #[test]
    fn prop_execution_order_places_dependencies_first(dag in arb_dag(1, 15)) {
        let plan = ExecutionPlanner::default().plan(&dag_prd(&dag));

        prop_assert_eq!(plan.execution_order.len(), dag.len());
        let position: HashMap<&str, usize> = plan
            .execution_order
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();
        for (id, _, deps) in &dag {
            for dep in deps {
                prop_assert!(
                    position[dep.as_str()] < position[id.as_str()],
                    "{} placed after {}",
                    dep,
                    id
                );
            }
        }
    }

    #[test]
    fn prop_phases_partition_stories(dag in arb_dag(1, 15)) {
        let plan = ExecutionPlanner::default().plan(&dag_prd(&dag));

        let mut assigned: HashMap<&str, usize> = HashMap::new();
        for (i, phase) in plan.phases.iter().enumerate() {
            prop_assert_eq!(phase.phase_number, i + 1);
            prop_assert_eq!(phase.can_parallelize, phase.stories.len() > 1);
            for id in &phase.stories {
                prop_assert!(
                    assigned.insert(id.as_str(), phase.phase_number).is_none(),
                    "{} assigned twice",
                    id
                );
            }
        }

        let all: HashSet<&str> = dag.iter().map(|(id, _, _)| id.as_str()).collect();
        let covered: HashSet<&str> = assigned.keys().copied().collect();
        prop_assert_eq!(covered, all);

        // every dependency lands in a strictly earlier phase
        for (id, _, deps) in &dag {
            for dep in deps {
                prop_assert!(assigned[dep.as_str()] < assigned[id.as_str()]);
            }
        }
    }

    #[test]
    fn prop_critical_path_is_heaviest_chain(dag in arb_dag(1, 15)) {
        let plan = ExecutionPlanner::default().plan(&dag_prd(&dag));

        let weight = weights(&dag);
        let deps: HashMap<&str, &[String]> = dag
            .iter()
            .map(|(id, _, deps)| (id.as_str(), deps.as_slice()))
            .collect();

        let path_sum: u32 = plan.critical_path.iter().map(|id| weight[id.as_str()]).sum();
        prop_assert_eq!(plan.critical_path_length, path_sum);

        let mut memo = HashMap::new();
        let heaviest = dag
            .iter()
            .map(|(id, _, _)| heaviest_from(id, &deps, &weight, &mut memo))
            .max()
            .unwrap_or(0);
        prop_assert_eq!(plan.critical_path_length, heaviest);

        for pair in plan.critical_path.windows(2) {
            prop_assert!(deps[pair[1].as_str()].contains(&pair[0]));
        }
    }

    #[test]
    fn prop_back_edge_is_reported_as_cycle(mut dag in arb_dag(2, 8)) {
        // S0 and the highest-numbered story depend on each other
        let last = format!("S{}", dag.len() - 1);
        for (id, _, deps) in dag.iter_mut() {
            if id == "S0" {
                deps.push(last.clone());
            } else if *id == last {
                deps.push("S0".to_string());
            }
        }

        let report = PrdValidator::default().validate(&dag_prd(&dag), None);
        let cycle = report
            .errors
            .iter()
            .find(|e| e.code == IssueCode::CircularDependency);
        prop_assert!(cycle.is_some(), "no cycle reported: {:?}", report.errors);
        let message = &cycle.unwrap().message;
        prop_assert!(message.starts_with("Circular dependency detected: "));
        prop_assert!(message.contains("S0"), "{}", message);
    }

    #[test]
    fn prop_analysis_is_idempotent(dag in arb_dag(1, 20)) {
        let json = dag_prd(&dag);
        let analyzer = Analyzer::default();

        let first = serde_json::to_string(&analyzer.analyze(&json, None)).unwrap();
        let second = serde_json::to_string(&analyzer.analyze(&json, None)).unwrap();
        prop_assert_eq!(first, second);
    }
}
