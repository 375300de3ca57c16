use std::time::Duration;

use thiserror::Error;

use crate::types::Party;

/// Raised when grid/district geometry cannot produce a valid partition.
/// Fatal to starting a run; never silently corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid_width must be positive")]
    ZeroGridWidth,

    #[error("districts start as squares, so district_size must be a perfect square (got {0})")]
    DistrictSizeNotSquare(usize),

    #[error("grid_width {width} must be a multiple of the district side {side}")]
    WidthNotDivisible { width: usize, side: usize },

    #[error("{count} districts cannot be laid out as a square grid of districts")]
    DistrictCountNotSquare { count: usize },

    #[error("a grid of {0} voters cannot split evenly between two parties")]
    OddVoterCount(usize),
}

/// Simulation parameters.
///
/// Geometry fields (`grid_width`, `district_size`) are validated by
/// [`validate`](SimConfig::validate) before any run starts. Budget fields are
/// `None` for "run until paused".
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Width (and height) of the voter grid.
    pub grid_width: usize,
    /// Number of voters per district; must be a perfect square.
    pub district_size: usize,
    /// Party the swap search favors.
    pub help_party: Party,
    /// Bias acceptance toward creating/preserving tied districts.
    pub favor_tie: bool,
    /// Accepted swaps per run before the run ends.
    pub num_swaps: Option<u64>,
    /// Wall-clock budget per run.
    pub simulation_time: Option<Duration>,
    /// Number of simulation repeats before the controller completes.
    pub num_simulations: Option<u32>,
    /// Swap attempts performed per controller tick.
    pub swaps_per_tick: u32,
    /// RNG seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_width: 24,
            district_size: 16,
            help_party: Party::Blue,
            favor_tie: false,
            num_swaps: None,
            simulation_time: None,
            num_simulations: None,
            swaps_per_tick: 1,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Side length of one square district.
    #[inline] pub fn district_side(&self) -> usize { self.district_size.isqrt() }

    /// Total number of districts the grid decomposes into.
    #[inline]
    pub fn num_districts(&self) -> usize {
        self.grid_width * self.grid_width / self.district_size
    }

    /// Check the perfect-square and divisibility constraints that make the
    /// square-district tiling possible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 {
            return Err(ConfigError::ZeroGridWidth);
        }

        let side = self.district_side();
        if side * side != self.district_size || side == 0 {
            return Err(ConfigError::DistrictSizeNotSquare(self.district_size));
        }
        if self.grid_width % side != 0 {
            return Err(ConfigError::WidthNotDivisible { width: self.grid_width, side });
        }

        let count = self.num_districts();
        if count.isqrt().pow(2) != count {
            return Err(ConfigError::DistrictCountNotSquare { count });
        }

        let voters = self.grid_width * self.grid_width;
        if voters % 2 != 0 {
            return Err(ConfigError::OddVoterCount(voters));
        }

        Ok(())
    }
}
