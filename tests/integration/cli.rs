//! Tests that run the prdplan binary

use std::fs;
use std::process::{Command, Output};

use prdplan::config::CONFIG_ENV_VAR;
use serde_json::Value;
use tempfile::TempDir;

use super::helpers::*;

fn prdplan(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_prdplan"))
        .args(args)
        .env_remove(CONFIG_ENV_VAR)
        .output()
        .expect("Failed to run prdplan")
}

fn write_prd(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("prd.json");
    fs::write(&path, content).expect("Failed to write PRD");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_validate_valid_prd_exits_zero() {
    let dir = TempDir::new().unwrap();
    let path = write_prd(&dir, &prd_json(vec![valid_story("US-1", "web", 2, &[])]));

    let output = prdplan(&["validate", &path, "--json"]);
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["is_valid"], Value::Bool(true));
}

#[test]
fn test_validate_invalid_prd_exits_one() {
    let dir = TempDir::new().unwrap();
    let path = write_prd(&dir, &prd_json(vec![valid_story("US-1", "web", 2, &["US-2"])]));

    let output = prdplan(&["validate", &path]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MISSING_DEPENDENCY"));
}

#[test]
fn test_validate_with_codebases_flag() {
    let dir = TempDir::new().unwrap();
    let path = write_prd(&dir, &prd_json(vec![valid_story("US-1", "firmware", 2, &[])]));

    let output = prdplan(&["validate", &path, "--codebases", "firmware, cloud"]);
    assert!(output.status.success());
}

#[test]
fn test_analyze_json_has_all_sections() {
    let dir = TempDir::new().unwrap();
    let path = write_prd(
        &dir,
        &prd_json(vec![
            valid_story("US-1", "backend", 2, &[]),
            valid_story("US-2", "web", 2, &["US-1"]),
        ]),
    );

    let output = prdplan(&["--json", "analyze", &path]);
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["validation"]["is_valid"], Value::Bool(true));
    assert_eq!(report["quality"]["grade"], Value::String("A".into()));
    assert_eq!(report["plan"]["execution_order"][1], Value::String("US-2".into()));
}

#[test]
fn test_plan_reads_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = Command::new(env!("CARGO_BIN_EXE_prdplan"))
        .args(["plan", "-", "--json"])
        .env_remove(CONFIG_ENV_VAR)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn prdplan");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(prd_json(vec![valid_story("US-1", "web", 2, &[])]).as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let plan: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["phases"][0]["stories"][0], Value::String("US-1".into()));
}

#[test]
fn test_missing_file_is_an_error() {
    let output = prdplan(&["evaluate", "/nonexistent/prd.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("/nonexistent/prd.json"));
}

#[test]
fn test_bad_config_flag_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_prd(&dir, &prd_json(vec![valid_story("US-1", "web", 2, &[])]));

    let output = prdplan(&["plan", &path, "--config", "/nonexistent/prdplan.toml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
}

#[test]
fn test_completions_for_bash() {
    let output = prdplan(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("prdplan"));
}
