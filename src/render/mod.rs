//! Human-readable terminal output for reports
//!
//! ## Module Organization
//!
//! - `validation`: errors and warnings with their JSON paths
//! - `quality`: score, grade, category breakdown and issues
//! - `plan`: phases, critical path and recommendations

mod plan;
mod quality;
mod validation;


use crate::analysis::AnalysisReport;

pub use plan::render_plan;
pub use quality::{grade_indicator, render_quality};
pub use validation::{render_validation, severity_indicator};

/// All three reports, one section after another
pub fn render_analysis(report: &AnalysisReport) -> String {
    let mut output = String::new();
    output.push_str(&render_validation(&report.validation));
    output.push('\n');
    output.push_str(&render_quality(&report.quality));
    output.push('\n');
    output.push_str(&render_plan(&report.plan));
    output
}

fn heading(title: &str) -> String {
    format!("{title}\n{}\n", "=".repeat(title.chars().count()))
}
