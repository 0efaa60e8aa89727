use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prdplan")]
#[command(about = "PRD validation, quality scoring and execution planning", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Engine config file (TOML). Falls back to $PRDPLAN_CONFIG, then defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print reports as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log engine decisions to stderr (overridden by $PRDPLAN_LOG / $RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The PRD document to read
#[derive(Args)]
pub struct InputArgs {
    /// Path to the PRD JSON file ("-" for stdin)
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check structure and dependency references (exits 1 when invalid)
    Validate {
        #[command(flatten)]
        input: InputArgs,

        /// Allowed repo names, comma-separated (defaults to the configured set)
        #[arg(long)]
        codebases: Option<String>,
    },

    /// Score PRD quality (0-100, graded A-F)
    Evaluate {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Compute execution order, phases and critical path
    Plan {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Run validation, evaluation and planning together (exits 1 when invalid)
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Allowed repo names, comma-separated (defaults to the configured set)
        #[arg(long)]
        codebases: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}
