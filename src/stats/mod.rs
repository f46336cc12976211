//! Assembly contiguity statistics
pub mod distribution;
pub mod index;
pub mod milestone;

pub use distribution::{compute, compute_from_lengths, DistributionResult, NxHit, NxValue, StatsConfig};
pub use index::LengthIndex;
pub use milestone::{Milestone, MilestoneHit, MilestonePolicy};
