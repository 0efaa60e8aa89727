use std::str::FromStr;

use anyhow::Result;
use prdplan::commands::common::parse_codebases;
use prdplan::commands::{analyze, evaluate, plan, validate, CommandContext};
use prdplan::completions::{generate_completions, Shell};

use super::types::{Cli, Commands};

/// Run the selected command. Returns `false` when the process should exit
/// with a failure status.
pub fn dispatch(cli: Cli) -> Result<bool> {
    let Cli {
        config,
        json,
        command,
        ..
    } = cli;

    if let Commands::Completions { shell } = &command {
        let shell = Shell::from_str(shell)?;
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate_completions(&mut cmd, shell);
        return Ok(true);
    }

    let ctx = CommandContext::new(config.as_deref(), json)?;
    let codebases = |raw: Option<String>| raw.as_deref().map(parse_codebases).unwrap_or_default();

    match command {
        Commands::Validate { input, codebases: raw } => {
            validate::execute(&ctx, &input.input, &codebases(raw))
        }
        Commands::Evaluate { input } => evaluate::execute(&ctx, &input.input).map(|()| true),
        Commands::Plan { input } => plan::execute(&ctx, &input.input).map(|()| true),
        Commands::Analyze { input, codebases: raw } => {
            analyze::execute(&ctx, &input.input, &codebases(raw))
        }
        Commands::Completions { .. } => Ok(true),
    }
}
