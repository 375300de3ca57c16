use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crate::config::{ConfigError, SimConfig};
use crate::session::Session;

/// Lifecycle of a controller: toggled between stopped and running by the
/// driver, and moved to completed once the configured repeats are exhausted.
/// Completed is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
    Completed,
}

/// Drives a session through swap batches under the configured budgets.
///
/// Cadence is the caller's business: the controller never sleeps or schedules.
/// It only decides whether a tick may run, counts accepted swaps and wall
/// clock against the budgets, and rebuilds a fresh session between repeats.
#[derive(Debug)]
pub struct Controller {
    config: SimConfig,
    session: Session,
    state: RunState,
    swaps_done: u64,
    run_started: Option<Instant>,
    elapsed: Duration,
    simulation_number: u32,
    final_scores: Vec<u32>,
}

impl Controller {
    /// Validate the config and set up the first session, stopped.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let session = Session::initialize(&config)?;
        Ok(Self {
            config,
            session,
            state: RunState::Stopped,
            swaps_done: 0,
            run_started: None,
            elapsed: Duration::ZERO,
            simulation_number: 1,
            final_scores: Vec::new(),
        })
    }

    #[inline] pub fn state(&self) -> RunState { self.state }

    /// Read access to the current session.
    #[inline] pub fn session(&self) -> &Session { &self.session }

    /// 1-based index of the simulation currently (or last) running.
    #[inline] pub fn simulation_number(&self) -> u32 { self.simulation_number }

    /// Accepted swaps in the current run.
    #[inline] pub fn swaps_done(&self) -> u64 { self.swaps_done }

    /// Help-party score recorded at the end of each completed run.
    #[inline] pub fn final_scores(&self) -> &[u32] { &self.final_scores }

    /// Begin or resume stepping. A completed controller stays completed.
    pub fn start(&mut self) {
        if self.state == RunState::Stopped {
            self.state = RunState::Running;
            self.run_started = Some(Instant::now());
        }
    }

    /// Stop stepping without losing run progress; `start` resumes.
    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            self.elapsed += self.run_started.take().map_or(Duration::ZERO, |t| t.elapsed());
            self.state = RunState::Stopped;
        }
    }

    /// Run one batch of swap attempts (`swaps_per_tick` steps).
    ///
    /// Returns the union of districts touched by accepted swaps in the batch;
    /// empty while not running or when every attempt was a no-op. Budget
    /// checks happen after every step so a run never overshoots its limits.
    pub fn tick(&mut self) -> BTreeSet<u32> {
        let mut touched = BTreeSet::new();
        if self.state != RunState::Running {
            return touched;
        }

        for _ in 0..self.config.swaps_per_tick.max(1) {
            let pair = self.session.step(self.config.help_party, self.config.favor_tie);
            if !pair.is_empty() {
                self.swaps_done += 1;
                touched.extend(pair);
            }
            if self.budget_exhausted() {
                self.finish_run();
                break;
            }
        }
        touched
    }

    /// Total running time of the current run, across pauses.
    fn running_time(&self) -> Duration {
        self.elapsed + self.run_started.map_or(Duration::ZERO, |t| t.elapsed())
    }

    fn budget_exhausted(&self) -> bool {
        if self.config.num_swaps.is_some_and(|max| self.swaps_done >= max) {
            return true;
        }
        self.config.simulation_time.is_some_and(|limit| self.running_time() >= limit)
    }

    /// Close out the current run: record its final score, then either rebuild
    /// a fresh grid and partition for the next repeat or complete for good.
    fn finish_run(&mut self) {
        self.final_scores.push(self.session.score().get(self.config.help_party));

        if self.config.num_simulations.is_some_and(|n| self.simulation_number >= n) {
            self.state = RunState::Completed;
            self.run_started = None;
            return;
        }

        self.simulation_number += 1;
        self.swaps_done = 0;
        self.elapsed = Duration::ZERO;
        self.run_started = Some(Instant::now());

        // Offset the seed per repeat so seeded reruns don't replay the
        // same grid, while staying reproducible overall.
        let mut next = self.config.clone();
        if let Some(seed) = next.seed {
            next.seed = Some(seed.wrapping_add(self.simulation_number as u64));
        }
        self.session = Session::initialize(&next)
            .expect("configuration was validated in Controller::new");
    }
}
