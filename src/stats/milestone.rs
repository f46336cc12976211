//! "Contig-at" milestones: how many sequences, largest first, it takes to
//! accumulate a given number of bases.

use serde::Serialize;
use tracing::debug;

/// First goal and initial step for milestone generation
pub const INITIAL_STEP: u64 = 1_000_000;

/// How milestone goals are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestonePolicy {
    /// Goals every 1 Mb up to 10 Mb, then every 10 Mb up to 100 Mb, and so
    /// on, until the reference total is passed.
    #[default]
    Standard,
    /// Fixed goals at 1, 2, 5 and 10 Mb.
    Baylor,
}

/// Where a goal was first reached in the descending scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MilestoneHit {
    /// Number of sequences scanned, largest first
    pub count: u64,
    /// Length of the sequence that crossed the goal
    pub length: u64,
    /// Cumulative bases at that point
    pub total_bp: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub goal: u64,
    pub hit: Option<MilestoneHit>,
}

impl Milestone {
    fn new(goal: u64) -> Self {
        Self { goal, hit: None }
    }

    pub fn is_bound(&self) -> bool {
        self.hit.is_some()
    }
}

/// Generate the ordered goal list for a reference total
pub fn generate_goals(policy: MilestonePolicy, reference_total: u64) -> Vec<Milestone> {
    match policy {
        MilestonePolicy::Baylor => [1, 2, 5, 10]
            .iter()
            .map(|&m| Milestone::new(m * INITIAL_STEP))
            .collect(),
        MilestonePolicy::Standard => {
            let mut goals = Vec::new();
            let mut step = INITIAL_STEP;
            let mut current = 0u64;
            while current <= reference_total {
                if current / step >= 10 {
                    match step.checked_mul(10) {
                        Some(next) => step = next,
                        None => break,
                    }
                }
                // Goals stop at the last one representable in a u64.
                match current.checked_add(step) {
                    Some(next) => current = next,
                    None => break,
                }
                goals.push(Milestone::new(current));
            }
            goals
        }
    }
}

/// Binds goals in ascending order as the cumulative sum grows.
pub struct MilestoneTracker {
    goals: Vec<Milestone>,
    next: usize,
}

impl MilestoneTracker {
    pub fn new(goals: Vec<Milestone>) -> Self {
        Self { goals, next: 0 }
    }

    /// Record one scan step. Every goal crossed by `cumulative` is bound to
    /// this step, so closely spaced goals can bind together.
    pub fn observe(&mut self, cumulative: u64, seen: u64, length: u64) {
        while self.next < self.goals.len() {
            let goal = &mut self.goals[self.next];
            if cumulative < goal.goal || goal.hit.is_some() {
                break;
            }
            debug!(
                "Milestone {} ({} bp) reached at sum {} after {} sequences, length {}",
                self.next, goal.goal, cumulative, seen, length
            );
            goal.hit = Some(MilestoneHit {
                count: seen,
                length,
                total_bp: cumulative,
            });
            self.next += 1;
        }
    }

    pub fn finish(self) -> Vec<Milestone> {
        self.goals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal_values(policy: MilestonePolicy, total: u64) -> Vec<u64> {
        generate_goals(policy, total).iter().map(|m| m.goal).collect()
    }

    #[test]
    fn test_baylor_goals_are_fixed() {
        assert_eq!(
            goal_values(MilestonePolicy::Baylor, 123),
            vec![1_000_000, 2_000_000, 5_000_000, 10_000_000]
        );
    }

    #[test]
    fn test_standard_goals_step_up_after_ten() {
        let mut expected: Vec<u64> = (1..=10).map(|m| m * 1_000_000).collect();
        expected.extend([20_000_000, 30_000_000]);
        assert_eq!(goal_values(MilestonePolicy::Standard, 25_000_000), expected);
    }

    #[test]
    fn test_standard_goals_for_fifteen_megabases() {
        let mut expected: Vec<u64> = (1..=10).map(|m| m * 1_000_000).collect();
        expected.push(20_000_000);
        assert_eq!(goal_values(MilestonePolicy::Standard, 15_000_000), expected);
    }

    #[test]
    fn test_standard_goals_pass_total() {
        // A goal equal to the total still gets a successor.
        assert_eq!(
            goal_values(MilestonePolicy::Standard, 2_000_000),
            vec![1_000_000, 2_000_000, 3_000_000]
        );
        assert_eq!(goal_values(MilestonePolicy::Standard, 0), vec![1_000_000]);
    }

    #[test]
    fn test_standard_goals_hundred_megabase_step() {
        let goals = goal_values(MilestonePolicy::Standard, 250_000_000);
        assert_eq!(&goals[9..], &[
            10_000_000, 20_000_000, 30_000_000, 40_000_000, 50_000_000,
            60_000_000, 70_000_000, 80_000_000, 90_000_000, 100_000_000,
            200_000_000, 300_000_000,
        ]);
    }

    #[test]
    fn test_standard_goals_near_u64_max_terminate() {
        let goals = goal_values(MilestonePolicy::Standard, 10_000_000_000_000_000_000);
        assert_eq!(goals.last(), Some(&10_000_000_000_000_000_000));
        assert!(goals.windows(2).all(|w| w[0] < w[1]));

        let goals = goal_values(MilestonePolicy::Standard, u64::MAX);
        assert_eq!(goals.last(), Some(&10_000_000_000_000_000_000));
    }

    #[test]
    fn test_tracker_binds_several_goals_in_one_step() {
        let mut tracker = MilestoneTracker::new(generate_goals(MilestonePolicy::Baylor, 0));
        tracker.observe(600_000, 1, 600_000);
        tracker.observe(5_600_000, 2, 5_000_000);
        tracker.observe(9_000_000, 3, 3_400_000);

        let goals = tracker.finish();
        assert_eq!(goals[0].hit.map(|h| h.count), Some(2));
        assert_eq!(goals[1].hit.map(|h| h.count), Some(2));
        assert_eq!(goals[2].hit, Some(MilestoneHit { count: 2, length: 5_000_000, total_bp: 5_600_000 }));
        assert!(!goals[3].is_bound());
    }

    #[test]
    fn test_tracker_never_rebinds() {
        let mut tracker = MilestoneTracker::new(vec![Milestone::new(10)]);
        tracker.observe(12, 1, 12);
        tracker.observe(20, 2, 8);

        let goals = tracker.finish();
        assert_eq!(goals[0].hit, Some(MilestoneHit { count: 1, length: 12, total_bp: 12 }));
    }
}
