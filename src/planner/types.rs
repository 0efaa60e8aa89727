//! Execution plan types

use serde::{Deserialize, Serialize};

/// A batch of stories whose dependencies are all satisfied by earlier phases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPhase {
    /// 1-based, consecutive
    pub phase_number: usize,
    pub stories: Vec<String>,
    pub can_parallelize: bool,
    pub rationale: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPlan {
    pub execution_order: Vec<String>,
    pub phases: Vec<ExecutionPhase>,
    pub critical_path: Vec<String>,
    /// Sum of complexity weights along `critical_path`
    pub critical_path_length: u32,
    pub parallelization_opportunities: Vec<Vec<String>>,
    pub recommendations: Vec<String>,
}

impl ExecutionPlan {
    /// Empty plan carrying a single explanation
    pub(crate) fn empty(reason: &str) -> Self {
        Self {
            recommendations: vec![reason.to_string()],
            ..Self::default()
        }
    }
}

/// Planning attributes derived from one story
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StoryMeta {
    pub repo: String,
    pub priority: i64,
    /// 1-3, from the acceptance criteria count
    pub complexity: u32,
}

/// Complexity tier from the number of acceptance criteria
pub fn complexity_tier(criteria_count: usize) -> u32 {
    match criteria_count {
        0..=3 => 1,
        4..=6 => 2,
        _ => 3,
    }
}
