//! End-to-end analysis of complete PRDs

use prdplan::evaluator::Grade;
use prdplan::validator::IssueCode;
use prdplan::{Analyzer, PrdValidator};
use serde_json::json;

use super::helpers::*;

#[test]
fn test_three_independent_stories() {
    let json = prd_json(vec![
        valid_story("US-1", "backend", 3, &[]),
        valid_story("US-2", "backend", 3, &[]),
        valid_story("US-3", "backend", 3, &[]),
    ]);
    let report = Analyzer::default().analyze(&json, None);

    assert!(report.validation.is_valid);
    assert!(report.validation.errors.is_empty());
    assert!(report.validation.warnings.is_empty());

    assert_eq!(report.plan.phases.len(), 1);
    assert!(report.plan.phases[0].can_parallelize);
    assert_eq!(report.plan.phases[0].stories, vec!["US-1", "US-2", "US-3"]);
    assert_eq!(report.plan.critical_path_length, 1);

    assert_eq!(report.quality.score, 100);
    assert_eq!(report.quality.grade, Grade::A);
}

#[test]
fn test_six_story_chain() {
    let stories = (1..=6)
        .map(|i| {
            let prev = format!("US-{}", i - 1);
            let deps: Vec<&str> = if i == 1 { vec![] } else { vec![prev.as_str()] };
            valid_story(&format!("US-{i}"), "web", 2, &deps)
        })
        .collect();
    let report = Analyzer::default().analyze(&prd_json(stories), None);

    // depth 5 does not exceed the threshold
    assert!(report.validation.is_valid);
    assert!(!report
        .validation
        .has_warning(IssueCode::DeepDependencyChain));

    assert_eq!(report.plan.phases.len(), 6);
    assert!(report.plan.phases.iter().all(|p| !p.can_parallelize));
    assert_eq!(
        report.plan.execution_order,
        vec!["US-1", "US-2", "US-3", "US-4", "US-5", "US-6"]
    );
}

#[test]
fn test_seven_story_chain_warns_about_depth() {
    let stories = (1..=7)
        .map(|i| {
            let prev = format!("US-{}", i - 1);
            let deps: Vec<&str> = if i == 1 { vec![] } else { vec![prev.as_str()] };
            valid_story(&format!("US-{i}"), "web", 2, &deps)
        })
        .collect();
    let report = Analyzer::default().analyze(&prd_json(stories), None);

    assert!(report.validation.is_valid);
    assert!(report.validation.has_warning(IssueCode::DeepDependencyChain));
    assert!(report
        .plan
        .recommendations
        .iter()
        .any(|r| r.starts_with("OPTIMIZATION: 7 sequential phases")));
}

#[test]
fn test_accept_returns_typed_stories() {
    let json = prd_json(vec![
        valid_story("US-1", "backend", 2, &[]),
        valid_story("US-2", "web", 2, &["US-1"]),
    ]);
    let accepted = PrdValidator::default().accept(&json, None).unwrap();

    assert_eq!(accepted.stories.len(), 2);
    assert_eq!(accepted.stories[1].dependencies, vec!["US-1"]);
    assert_eq!(accepted.stories[0].priority, Some(5));
}

#[test]
fn test_accept_rejects_cycles() {
    let json = prd_json(vec![
        valid_story("A", "backend", 2, &["C"]),
        valid_story("B", "backend", 2, &["A"]),
        valid_story("C", "backend", 2, &["B"]),
    ]);
    let report = PrdValidator::default().accept(&json, None).unwrap_err();

    assert!(!report.is_valid);
    let cycle = report
        .errors
        .iter()
        .find(|e| e.code == IssueCode::CircularDependency)
        .unwrap();
    assert_eq!(cycle.message, "Circular dependency detected: A -> C -> B -> A");
}

#[test]
fn test_custom_codebases() {
    let json = prd_json(vec![valid_story("US-1", "firmware", 2, &[])]);
    let validator = PrdValidator::default();

    let default = validator.validate(&json, None);
    assert!(default.has_error(IssueCode::InvalidCodebase));

    let allowed = vec!["firmware".to_string()];
    let custom = validator.validate(&json, Some(allowed.as_slice()));
    assert!(custom.is_valid);
}

#[test]
fn test_degenerate_documents() {
    let analyzer = Analyzer::default();

    let empty = analyzer.analyze(&json!({"userStories": []}).to_string(), None);
    assert!(!empty.validation.is_valid);
    assert!(empty.validation.has_error(IssueCode::EmptyStories));
    assert_eq!(empty.quality.score, 0);
    assert_eq!(empty.quality.grade, Grade::F);
    assert!(empty.plan.phases.is_empty());
    assert_eq!(empty.plan.recommendations.len(), 1);

    let garbage = analyzer.analyze("{{{", None);
    assert_eq!(garbage.validation.errors.len(), 1);
    assert_eq!(garbage.validation.errors[0].code, IssueCode::InvalidJson);
    assert_eq!(garbage.quality.grade, Grade::F);
    assert!(garbage.plan.execution_order.is_empty());
}
