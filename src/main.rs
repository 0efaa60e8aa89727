mod cli;

use anyhow::Result;
use clap::Parser;

use cli::{dispatch, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    prdplan::logging::init(cli.verbose);

    if !dispatch(cli)? {
        std::process::exit(1);
    }
    Ok(())
}
