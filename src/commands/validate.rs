//! `prdplan validate`

use std::path::Path;

use anyhow::Result;

use super::common::{read_prd, CommandContext};
use crate::render::render_validation;
use crate::validator::PrdValidator;

/// Validate a PRD. Returns whether it is valid.
pub fn execute(ctx: &CommandContext, input: &Path, codebases: &[String]) -> Result<bool> {
    let prd_json = read_prd(input)?;
    let validator = PrdValidator::new(ctx.config.validator.clone());

    let report = validator.validate(&prd_json, Some(codebases));
    ctx.emit(&report, render_validation)?;

    Ok(report.is_valid)
}
