use std::time::Duration;

use anyhow::Result;

use crate::cli::{Cli, RunArgs};
use crate::config::SimConfig;
use crate::controller::{Controller, RunState};

/// Consecutive empty ticks before a run is considered converged.
/// A converged map has no improving swap left; waiting longer changes nothing.
const IDLE_TICK_LIMIT: u32 = 200;

pub fn run(cli: &Cli, args: &RunArgs) -> Result<()> {
    let config = SimConfig {
        grid_width: args.grid_width,
        district_size: args.district_size,
        help_party: args.help_party.into(),
        favor_tie: args.favor_tie,
        num_swaps: Some(args.swaps),
        simulation_time: args.time_limit.map(Duration::from_secs),
        num_simulations: Some(args.simulations),
        swaps_per_tick: args.swaps_per_tick,
        seed: args.seed,
    };

    let mut controller = Controller::new(config)?;
    controller.start();

    let mut idle_ticks = 0u32;
    while controller.state() == RunState::Running {
        let touched = controller.tick();

        if touched.is_empty() {
            idle_ticks += 1;
            if idle_ticks >= IDLE_TICK_LIMIT {
                if cli.verbose > 0 {
                    eprintln!(
                        "[run] sim={} converged after {} swaps, stopping",
                        controller.simulation_number(),
                        controller.swaps_done(),
                    );
                }
                controller.pause();
                break;
            }
        } else {
            idle_ticks = 0;
            if cli.verbose > 1 {
                eprintln!(
                    "[run] sim={} swaps={} touched={:?} score=({})",
                    controller.simulation_number(),
                    controller.swaps_done(),
                    touched,
                    controller.session().score(),
                );
            }
        }
    }

    if cli.verbose > 0 {
        for (i, score) in controller.final_scores().iter().enumerate() {
            eprintln!("[run] sim={} final help-party districts: {}", i + 1, score);
        }
    }

    if let Some(path) = &args.svg {
        controller.session().to_svg(path)?;
        if cli.verbose > 0 {
            eprintln!("[run] wrote map -> {}", path.display());
        }
    }

    let score = controller.session().score();
    if args.json {
        println!("{}", serde_json::to_string(&score)?);
    } else {
        println!("{score}");
    }
    Ok(())
}
