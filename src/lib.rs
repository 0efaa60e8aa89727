pub mod analysis;
pub mod commands;
pub mod completions;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod logging;
pub mod planner;
pub mod prd;
pub mod render;
pub mod validator;

pub use analysis::{AnalysisReport, Analyzer};
pub use config::EngineConfig;
pub use error::PrdplanError;
pub use evaluator::{QualityEvaluator, QualityReport};
pub use planner::{ExecutionPlan, ExecutionPlanner};
pub use validator::{PrdValidator, ValidationReport};
