//! Engine configuration: thresholds, weights and keyword tables.
//!
//! Every value defaults to the constants the engines were tuned with, so an
//! empty or partial TOML file is valid. Configuration is fixed once an engine
//! is constructed; engines only ever borrow it immutably.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PrdplanError, Result};

/// Environment variable naming a config file to load when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "PRDPLAN_CONFIG";

/// Codebase names accepted when the caller supplies no allow-list.
pub const DEFAULT_CODEBASES: &[&str] = &[
    "backend", "mobile", "frontend", "api", "web", "ios", "android",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub validator: ValidatorConfig,
    pub evaluator: EvaluatorConfig,
    pub planner: PlannerConfig,
}

impl EngineConfig {
    /// Load a config file and check it for consistency.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PrdplanError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: EngineConfig =
            toml::from_str(&content).map_err(|source| PrdplanError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Resolve the config to use: an explicit path wins, then
    /// `PRDPLAN_CONFIG`, then the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let from_env = env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading engine config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let weights = &self.evaluator.weights;
        let total = weights.clarity + weights.dependencies + weights.feasibility;
        if total != 100 {
            return Err(PrdplanError::InvalidConfig(format!(
                "evaluator weights must sum to 100 (got {total})"
            )));
        }

        if self.validator.default_codebases.is_empty() {
            return Err(PrdplanError::InvalidConfig(
                "validator.default_codebases cannot be empty".to_string(),
            ));
        }

        if self.validator.priority_min > self.validator.priority_max {
            return Err(PrdplanError::InvalidConfig(format!(
                "validator priority range is empty ({}..={})",
                self.validator.priority_min, self.validator.priority_max
            )));
        }

        if !(0.0..=1.0).contains(&self.planner.workload_share) {
            return Err(PrdplanError::InvalidConfig(format!(
                "planner.workload_share must be within 0..=1 (got {})",
                self.planner.workload_share
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub default_codebases: Vec<String>,
    pub min_title_length: usize,
    pub min_description_length: usize,
    pub min_criterion_length: usize,
    pub priority_min: i64,
    pub priority_max: i64,
    /// Dependency chains deeper than this produce a warning.
    pub max_dependency_depth: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            default_codebases: DEFAULT_CODEBASES.iter().map(|s| s.to_string()).collect(),
            min_title_length: 10,
            min_description_length: 30,
            min_criterion_length: 10,
            priority_min: 1,
            priority_max: 10,
            max_dependency_depth: 5,
        }
    }
}

/// Category weights, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub clarity: u32,
    pub dependencies: u32,
    pub feasibility: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            clarity: 40,
            dependencies: 30,
            feasibility: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityKeywords {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

impl Default for ComplexityKeywords {
    fn default() -> Self {
        Self {
            high: strings(&[
                "database migration",
                "schema change",
                "breaking change",
                "refactor",
                "architecture",
            ]),
            medium: strings(&["api endpoint", "authentication", "validation", "integration"]),
            low: strings(&["ui change", "text update", "style change", "bug fix"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    pub weights: Weights,
    pub min_title_length: usize,
    pub min_description_length: usize,
    pub min_criteria_count: usize,
    pub min_criterion_length: usize,
    /// A story with more dependencies than this is over-coupled.
    pub max_dependencies: usize,
    /// A story with more dependents than this is a bottleneck.
    pub bottleneck_dependents: usize,
    pub max_dependency_depth: usize,
    pub max_criteria_per_story: usize,
    pub max_average_criteria: f64,
    pub scope_creep_keywords: Vec<String>,
    pub vague_terms: Vec<String>,
    pub complexity_keywords: ComplexityKeywords,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            min_title_length: 15,
            min_description_length: 50,
            min_criteria_count: 2,
            min_criterion_length: 20,
            max_dependencies: 5,
            bottleneck_dependents: 3,
            max_dependency_depth: 5,
            max_criteria_per_story: 8,
            max_average_criteria: 6.0,
            scope_creep_keywords: strings(&[
                "and also",
                "additionally",
                "plus",
                "as well as",
                "while we're at it",
                "might as well",
                "along with",
            ]),
            vague_terms: strings(&["etc", "and more", "similar", "appropriate", "suitable"]),
            complexity_keywords: ComplexityKeywords::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub default_priority: i64,
    /// Stories with at least this many dependents are reported as bottlenecks.
    pub bottleneck_dependents: usize,
    /// Share of stories in one repo above which a workload warning is emitted.
    pub workload_share: f64,
    pub max_phases: usize,
    pub efficient_phases: usize,
    pub efficient_min_stories: usize,
    /// How many ids to list in start/bottleneck/quick-win recommendations.
    pub recommendation_limit: usize,
    pub critical_path_preview: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_priority: 5,
            bottleneck_dependents: 3,
            workload_share: 0.6,
            max_phases: 6,
            efficient_phases: 3,
            efficient_min_stories: 5,
            recommendation_limit: 3,
            critical_path_preview: 5,
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
