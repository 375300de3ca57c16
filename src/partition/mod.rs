mod algorithm;
mod metrics;
mod ops;
mod partition;
mod structures;

pub(self) use structures::Membership;
pub use partition::{DistrictBounds, Partition};
