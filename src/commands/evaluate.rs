//! `prdplan evaluate`

use std::path::Path;

use anyhow::Result;

use super::common::{read_prd, CommandContext};
use crate::evaluator::QualityEvaluator;
use crate::render::render_quality;

pub fn execute(ctx: &CommandContext, input: &Path) -> Result<()> {
    let prd_json = read_prd(input)?;
    let evaluator = QualityEvaluator::new(ctx.config.evaluator.clone());

    ctx.emit(&evaluator.evaluate(&prd_json), render_quality)
}
