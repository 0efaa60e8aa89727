//! `prdplan analyze`: validation, quality and plan in one report

use std::path::Path;

use anyhow::Result;

use super::common::{read_prd, CommandContext};
use crate::analysis::Analyzer;
use crate::render::render_analysis;

/// Analyze a PRD. Returns whether its validation part is valid.
pub fn execute(ctx: &CommandContext, input: &Path, codebases: &[String]) -> Result<bool> {
    let prd_json = read_prd(input)?;
    let analyzer = Analyzer::new(&ctx.config);

    let report = analyzer.analyze(&prd_json, Some(codebases));
    ctx.emit(&report, render_analysis)?;

    Ok(report.validation.is_valid)
}
