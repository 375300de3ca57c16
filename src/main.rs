use anyhow::Result;
use clap::Parser;

use gridmander::cli::{Cli, Commands};
use gridmander::commands::run;

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Run(args) => run::run(&cli, args),
    }
}
