#![doc = "Gridmander public API"]
mod config;
mod controller;
mod grid;
mod partition;
mod render;
mod session;
mod types;

pub mod cli;
pub mod commands;

#[doc(inline)]
pub use config::{ConfigError, SimConfig};

#[doc(inline)]
pub use controller::{Controller, RunState};

#[doc(inline)]
pub use grid::VoterGrid;

#[doc(inline)]
pub use partition::{DistrictBounds, Partition};

#[doc(inline)]
pub use session::Session;

#[doc(inline)]
pub use types::{Party, Score, Winner};
