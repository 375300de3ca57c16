use rand::SeedableRng;
use rand::rngs::StdRng;
use smallvec::SmallVec;

use crate::config::{ConfigError, SimConfig};
use crate::grid::VoterGrid;
use crate::partition::Partition;
use crate::types::{Party, Score, Winner};

/// One simulation run: a voter grid, its district partition, and the RNG
/// driving swap selection. All mutation flows through [`step`](Session::step);
/// drivers read state back between steps.
#[derive(Debug)]
pub struct Session {
    grid: VoterGrid,
    partition: Partition,
    rng: StdRng,
}

impl Session {
    /// Validate `config` and build a fresh grid and partition.
    pub fn initialize(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let grid = VoterGrid::generate(config.grid_width, &mut rng);
        let partition = Partition::build(&grid, config.district_size);

        Ok(Self { grid, partition, rng })
    }

    /// Perform one swap attempt biased toward `help`, returning the districts
    /// whose membership changed. An empty result is a valid no-op tick: no
    /// strictly improving adjacent cross-district pair was found in budget.
    pub fn step(&mut self, help: Party, favor_tie: bool) -> SmallVec<[u32; 2]> {
        self.partition.search_swap(&self.grid, &mut self.rng, help, favor_tie)
    }

    /// Current district counts per winner.
    #[inline] pub fn score(&self) -> Score { self.partition.score() }

    /// Winner of a single district.
    #[inline] pub fn winner(&self, district: u32) -> Winner { self.partition.winner(district) }

    /// Read access to the voter grid.
    #[inline] pub fn grid(&self) -> &VoterGrid { &self.grid }

    /// Read access to the district partition.
    #[inline] pub fn partition(&self) -> &Partition { &self.partition }
}
