//! `prdplan plan`

use std::path::Path;

use anyhow::Result;

use super::common::{read_prd, CommandContext};
use crate::planner::ExecutionPlanner;
use crate::render::render_plan;

pub fn execute(ctx: &CommandContext, input: &Path) -> Result<()> {
    let prd_json = read_prd(input)?;
    let planner = ExecutionPlanner::new(ctx.config.planner.clone());

    ctx.emit(&planner.plan(&prd_json), render_plan)
}
