//! Engine configuration resolution from flags and environment

use std::fs;

use prdplan::config::CONFIG_ENV_VAR;
use prdplan::{Analyzer, EngineConfig, PrdplanError};
use serial_test::serial;
use tempfile::TempDir;

use super::helpers::*;

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
#[serial]
fn test_resolve_defaults_without_env() {
    std::env::remove_var(CONFIG_ENV_VAR);
    let config = EngineConfig::resolve(None).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
#[serial]
fn test_resolve_from_env() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "env.toml", "[validator]\ndefault_codebases = [\"firmware\"]\n");

    std::env::set_var(CONFIG_ENV_VAR, &path);
    let config = EngineConfig::resolve(None);
    std::env::remove_var(CONFIG_ENV_VAR);

    let config = config.unwrap();
    assert_eq!(config.validator.default_codebases, vec!["firmware"]);

    // the configured allow-list drives validation
    let json = prd_json(vec![valid_story("US-1", "firmware", 2, &[])]);
    let report = Analyzer::new(&config).analyze(&json, None);
    assert!(report.validation.is_valid, "{:?}", report.validation.errors);
}

#[test]
#[serial]
fn test_explicit_path_wins_over_env() {
    let dir = TempDir::new().unwrap();
    let from_env = write_config(&dir, "env.toml", "[planner]\nmax_phases = 2\n");
    let explicit = write_config(&dir, "explicit.toml", "[planner]\nmax_phases = 9\n");

    std::env::set_var(CONFIG_ENV_VAR, &from_env);
    let config = EngineConfig::resolve(Some(explicit.as_path()));
    std::env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(config.unwrap().planner.max_phases, 9);
}

#[test]
#[serial]
fn test_inconsistent_config_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "weights.toml",
        "[evaluator.weights]\nclarity = 10\ndependencies = 10\nfeasibility = 10\n",
    );

    let err = EngineConfig::resolve(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, PrdplanError::InvalidConfig(_)));
}

#[test]
#[serial]
fn test_planner_thresholds_from_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "planner.toml", "[planner]\nmax_phases = 1\n");
    let config = EngineConfig::load(&path).unwrap();

    let json = prd_json(vec![
        valid_story("US-1", "backend", 2, &[]),
        valid_story("US-2", "backend", 2, &["US-1"]),
    ]);
    let plan = Analyzer::new(&config).analyze(&json, None).plan;

    assert!(plan
        .recommendations
        .iter()
        .any(|r| r.starts_with("OPTIMIZATION: 2 sequential phases")));
}
