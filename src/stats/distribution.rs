//! Length distribution statistics over an assembly.
//!
//! Lengths at or below the configured floor are dropped, the rest are sorted
//! and scanned largest first. One pass yields the median, the N-values and
//! the milestone bindings.

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, StatsError};
use crate::stats::index::LengthIndex;
use crate::stats::milestone::{generate_goals, Milestone, MilestonePolicy, MilestoneTracker};

/// Default length floor
pub const DEFAULT_MIN_LENGTH: u64 = 2000;

/// Percentiles reported as N-values
pub const NX_PERCENTILES: [u32; 5] = [10, 25, 50, 75, 95];

/// Parameters for one statistics run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsConfig {
    /// Sequences of this length or shorter are ignored
    pub min_length: u64,
    /// Expected genome size; 0 means use the sum of the kept lengths
    pub genome_size: u64,
    pub milestones: MilestonePolicy,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            genome_size: 0,
            milestones: MilestonePolicy::Standard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NxHit {
    /// Length of the sequence where the percentile was reached
    pub length: u64,
    /// Sequences scanned, largest first, to reach it
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NxValue {
    pub percentile: u32,
    pub hit: Option<NxHit>,
}

/// Statistics for one assembly. `None` marks a value that is undefined for
/// the input, e.g. the minimum of an empty set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionResult {
    pub min_length: u64,
    /// Sequences kept after the floor filter
    pub count: u64,
    /// Genome size if given, otherwise the sum of kept lengths
    pub reference_total: u64,
    pub total_over_length: u64,
    pub total_bp_over_length: u64,
    pub min: Option<u64>,
    pub max: Option<u64>,
    /// Reference total divided by count
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub nx: Vec<NxValue>,
    pub e_size: Option<f64>,
    pub milestones: Vec<Milestone>,
}

impl DistributionResult {
    /// N-value for a percentile in [`NX_PERCENTILES`]
    pub fn nx(&self, percentile: u32) -> Option<NxHit> {
        self.nx
            .iter()
            .find(|v| v.percentile == percentile)
            .and_then(|v| v.hit)
    }

    pub fn bound_milestones(&self) -> impl Iterator<Item = &Milestone> + '_ {
        self.milestones.iter().filter(|m| m.is_bound())
    }
}

/// Compute statistics over every length in the index
pub fn compute(index: &LengthIndex, config: &StatsConfig) -> Result<DistributionResult> {
    compute_from_lengths(index.lengths(), config)
}

pub fn compute_from_lengths<I>(lengths: I, config: &StatsConfig) -> Result<DistributionResult>
where
    I: IntoIterator<Item = u64>,
{
    let mut kept = Vec::new();
    let mut total_over_length = 0u64;
    let mut total_bp_over_length = 0u64;
    let mut observed_sum = 0u64;
    let mut sum_squares = 0u128;

    for len in lengths {
        if len <= config.min_length {
            continue;
        }
        observed_sum += len;
        sum_squares += u128::from(len) * u128::from(len);
        // The over-length tally keeps its own strict comparison.
        if len > config.min_length {
            total_over_length += 1;
            total_bp_over_length += len;
        }
        kept.push(len);
    }

    let reference_total = if config.genome_size != 0 {
        config.genome_size
    } else {
        observed_sum
    };

    let e_size = if reference_total == 0 {
        None
    } else {
        Some(sum_squares as f64 / reference_total as f64)
    };

    kept.sort_unstable();
    let count = kept.len() as u64;
    debug!(
        "Scanning {} sequences over {} bp (reference total {})",
        count, config.min_length, reference_total
    );

    let mut tracker = MilestoneTracker::new(generate_goals(config.milestones, reference_total));
    let mut nx: Vec<NxValue> = NX_PERCENTILES
        .iter()
        .map(|&percentile| NxValue { percentile, hit: None })
        .collect();

    let half = kept.len() / 2;
    let even = kept.len() % 2 == 0;
    let mut median_sum = 0u64;
    let mut median_count = 0u32;
    let mut sum = 0u64;

    for (rank, &len) in kept.iter().rev().enumerate() {
        let seen = rank as u64 + 1;

        // Even counts average the two central values: descending ranks
        // half - 1 and half, not the upper pair.
        if rank == half || (even && rank + 1 == half) {
            median_sum += len;
            median_count += 1;
        }

        sum += len;
        tracker.observe(sum, seen, len);

        if reference_total > 0 {
            let fraction = sum as f64 / reference_total as f64;
            for value in nx.iter_mut().filter(|v| v.hit.is_none()) {
                if fraction >= f64::from(value.percentile) / 100.0 {
                    value.hit = Some(NxHit { length: len, count: seen });
                }
            }
        }
    }

    let median = if kept.is_empty() {
        None
    } else if median_count == 1 || median_count == 2 {
        Some(median_sum as f64 / f64::from(median_count))
    } else {
        return Err(StatsError::InvariantViolation(format!(
            "invalid median count {} for {} sequences",
            median_count, count
        )));
    };

    let mean = if count == 0 {
        None
    } else {
        Some(reference_total as f64 / count as f64)
    };

    Ok(DistributionResult {
        min_length: config.min_length,
        count,
        reference_total,
        total_over_length,
        total_bp_over_length,
        min: kept.first().copied(),
        max: kept.last().copied(),
        mean,
        median,
        nx,
        e_size,
        milestones: tracker.finish(),
    })
}
