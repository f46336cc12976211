//! Assembly contiguity statistics.
//!
//! Load sequence lengths into a [`stats::LengthIndex`], compute a
//! [`stats::DistributionResult`] (N-values, E-size, contig-at milestones) and
//! render it with [`report::ReportFormatter`]. [`scaffold`] rebuilds scaffold
//! sequences from contigs and a gap layout.

pub mod batch;
pub mod error;
pub mod io;
pub mod report;
pub mod scaffold;
pub mod stats;

pub use error::{Result, StatsError};
