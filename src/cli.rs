use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use std::fmt;
use std::path::PathBuf;

use crate::types::Party;

/// Gerrymandering simulator CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "gridmander", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a headless simulation and report the district score
    Run(RunArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum PartyArg { Blue, Red }

impl From<PartyArg> for Party {
    fn from(arg: PartyArg) -> Party {
        match arg {
            PartyArg::Blue => Party::Blue,
            PartyArg::Red => Party::Red,
        }
    }
}

impl fmt::Display for PartyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartyArg::Blue => write!(f, "blue"),
            PartyArg::Red => write!(f, "red"),
        }
    }
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Width (and height) of the voter grid
    #[arg(long, default_value_t = 24)]
    pub grid_width: usize,

    /// Voters per district; must be a perfect square
    #[arg(long, default_value_t = 16)]
    pub district_size: usize,

    /// Party the swaps should favor
    #[arg(long, value_enum, default_value_t = PartyArg::Blue)]
    pub help_party: PartyArg,

    /// Bias swap acceptance toward tied districts
    #[arg(long)]
    pub favor_tie: bool,

    /// Accepted swaps per run
    #[arg(long, default_value_t = 1000)]
    pub swaps: u64,

    /// Wall-clock budget per run, in seconds
    #[arg(long)]
    pub time_limit: Option<u64>,

    /// Number of simulation repeats
    #[arg(long, default_value_t = 1)]
    pub simulations: u32,

    /// Swap attempts per tick
    #[arg(long, default_value_t = 64)]
    pub swaps_per_tick: u32,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit the final score as JSON
    #[arg(long)]
    pub json: bool,

    /// Write an SVG snapshot of the final map
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub svg: Option<PathBuf>,
}
