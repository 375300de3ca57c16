mod grid;

pub use grid::VoterGrid;
