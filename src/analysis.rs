//! Combined analysis: validation, quality and plan for one document

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::evaluator::{QualityEvaluator, QualityReport};
use crate::planner::{ExecutionPlan, ExecutionPlanner};
use crate::validator::{PrdValidator, ValidationReport};

/// The three reports for a single PRD, with no cross-referencing between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub validation: ValidationReport,
    pub quality: QualityReport,
    pub plan: ExecutionPlan,
}

/// Runs all three engines over the same input.
///
/// Each engine re-derives what it needs from the raw JSON, so the plan and
/// quality score are produced even when validation fails.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    validator: PrdValidator,
    evaluator: QualityEvaluator,
    planner: ExecutionPlanner,
}

impl Analyzer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            validator: PrdValidator::new(config.validator.clone()),
            evaluator: QualityEvaluator::new(config.evaluator.clone()),
            planner: ExecutionPlanner::new(config.planner.clone()),
        }
    }

    pub fn validator(&self) -> &PrdValidator {
        &self.validator
    }

    pub fn evaluator(&self) -> &QualityEvaluator {
        &self.evaluator
    }

    pub fn planner(&self) -> &ExecutionPlanner {
        &self.planner
    }

    pub fn analyze(&self, prd_json: &str, codebases: Option<&[String]>) -> AnalysisReport {
        let report = AnalysisReport {
            validation: self.validator.validate(prd_json, codebases),
            quality: self.evaluator.evaluate(prd_json),
            plan: self.planner.plan(prd_json),
        };

        tracing::debug!(
            valid = report.validation.is_valid,
            score = report.quality.score,
            phases = report.plan.phases.len(),
            "analyzed PRD"
        );
        report
    }
}
