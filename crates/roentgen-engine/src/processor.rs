//! Per-pulse propagation pipeline.
//!
//! [`PulseProcessor`] owns the reusable scratch structures — the boundary
//! set and the per-node accumulator — and turns one pulse into grid
//! deposits. Scratch reuse across pulses is valid only because exactly
//! one worker processes pulses at a time; a parallel engine would need
//! per-task scratch instead.

use std::sync::Arc;
use std::time::{Instant, SystemTime};

use indexmap::{IndexMap, IndexSet};
use roentgen_core::{CellPoint, NodeId, Pulse, TileGrid};
use roentgen_trace::{circle_boundary, trace_attenuated, MAX_RADIUS};

/// Strength-to-radius divisor: a pulse of strength `75π·r` reaches radius
/// roughly `r` before clamping.
const STRENGTH_PER_RADIUS: f64 = std::f64::consts::PI * 75.0;

/// Summary of one processed pulse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PulseReport {
    /// Rasterized (clamped) radius.
    pub radius: i32,
    /// Unique boundary targets traced.
    pub boundary_points: usize,
    /// Nodes that received a deposit.
    pub nodes_deposited: usize,
}

/// Turns pulses into grid deposits. One instance per tick worker.
pub struct PulseProcessor {
    grid: Arc<dyn TileGrid + Send + Sync>,
    min_trace_strength: f32,
    boundary: IndexSet<CellPoint>,
    deposits: IndexMap<NodeId, f32>,
}

impl PulseProcessor {
    /// Create a processor depositing into `grid`.
    pub fn new(grid: Arc<dyn TileGrid + Send + Sync>, min_trace_strength: f32) -> Self {
        Self {
            grid,
            min_trace_strength,
            boundary: IndexSet::new(),
            deposits: IndexMap::new(),
        }
    }

    /// Compute the affected area for `pulse` and commit its deposits.
    ///
    /// Traces one attenuated ray from the origin to every boundary point,
    /// summing per-node contributions, then deposits each node's total
    /// exactly once with a single per-pulse timestamp. A failed deposit
    /// is logged and skipped; the rest of the pulse still commits.
    pub fn process(&mut self, pulse: &Pulse) -> PulseReport {
        let started = Instant::now();

        let radius = radius_for_strength(pulse.strength);
        let origin = pulse.location.xy();
        circle_boundary(origin, radius, &mut self.boundary);

        // The boundary always holds at least the center point, but a zero
        // divisor here would poison every downstream deposit.
        if self.boundary.is_empty() {
            return PulseReport {
                radius,
                boundary_points: 0,
                nodes_deposited: 0,
            };
        }

        let per_ray = pulse.strength / self.boundary.len() as f32;
        for &target in &self.boundary {
            trace_attenuated(
                self.grid.as_ref(),
                origin,
                target,
                pulse.location.z,
                per_ray,
                self.min_trace_strength,
                &mut self.deposits,
            );
        }

        let timestamp = SystemTime::now();
        for (&node, &amount) in &self.deposits {
            if let Err(e) = self.grid.deposit(node, amount, timestamp, pulse.source) {
                log::warn!("dropping deposit of {amount} from source {}: {e}", pulse.source);
            }
        }

        let report = PulseReport {
            radius,
            boundary_points: self.boundary.len(),
            nodes_deposited: self.deposits.len(),
        };
        self.boundary.clear();
        self.deposits.clear();

        log::debug!(
            "pulse from source {} at {}: radius {}, {} rays, {} nodes, {:?}",
            pulse.source,
            pulse.location,
            report.radius,
            report.boundary_points,
            report.nodes_deposited,
            started.elapsed(),
        );
        report
    }
}

/// Closed-form strength→radius conversion, clamped to `[0, MAX_RADIUS]`.
fn radius_for_strength(strength: f32) -> i32 {
    let radius = (f64::from(strength) / STRENGTH_PER_RADIUS).round() as i32;
    radius.clamp(0, MAX_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roentgen_core::{SourceId, WorldPoint};
    use roentgen_test_utils::FixtureGrid;

    fn processor(grid: &Arc<FixtureGrid>) -> PulseProcessor {
        PulseProcessor::new(Arc::clone(grid) as Arc<dyn TileGrid + Send + Sync>, 0.0)
    }

    #[test]
    fn radius_follows_the_closed_form() {
        assert_eq!(radius_for_strength(0.0), 0);
        assert_eq!(radius_for_strength((75.0 * std::f64::consts::PI) as f32), 1);
        assert_eq!(radius_for_strength((10.0 * 75.0 * std::f64::consts::PI) as f32), 10);
        // Rounds, not truncates.
        assert_eq!(radius_for_strength((1.6 * 75.0 * std::f64::consts::PI) as f32), 2);
    }

    #[test]
    fn radius_clamps_at_both_ends() {
        assert_eq!(radius_for_strength(-500.0), 0);
        assert_eq!(radius_for_strength(1.0e9), MAX_RADIUS);
    }

    #[test]
    fn strength_75_pi_reaches_the_four_unit_neighbours() {
        let grid = Arc::new(FixtureGrid::open(9, 9));
        let mut processor = processor(&grid);
        let strength = (75.0 * std::f64::consts::PI) as f32;

        let report = processor.process(&Pulse::new(
            WorldPoint::new(4, 4, 0),
            strength,
            SourceId(1),
        ));

        assert_eq!(report.radius, 1);
        assert_eq!(report.boundary_points, 4);
        assert_eq!(report.nodes_deposited, 5);

        // Each of the 4 rays starts with strength/4; the origin lies on
        // every ray, the targets on one each.
        let per_ray = strength / 4.0;
        assert!((grid.deposited_at(4, 4) - strength).abs() < 1e-3);
        for (x, y) in [(5, 4), (3, 4), (4, 5), (4, 3)] {
            assert!((grid.deposited_at(x, y) - per_ray).abs() < 1e-3);
        }
    }

    #[test]
    fn initial_strength_is_conserved_across_rays() {
        let grid = Arc::new(FixtureGrid::open(41, 41));
        let mut processor = processor(&grid);
        let strength = (5.0 * 75.0 * std::f64::consts::PI) as f32;

        let report = processor.process(&Pulse::new(
            WorldPoint::new(20, 20, 0),
            strength,
            SourceId(2),
        ));

        let per_ray = strength / report.boundary_points as f32;
        let total_initial = per_ray * report.boundary_points as f32;
        assert!((total_initial - strength).abs() < strength * 1e-6);
    }

    #[test]
    fn zero_strength_pulse_deposits_nothing_anywhere() {
        let grid = Arc::new(FixtureGrid::open(5, 5));
        let mut processor = processor(&grid);

        let report = processor.process(&Pulse::new(WorldPoint::new(2, 2, 0), 0.0, SourceId(3)));

        assert_eq!(report.radius, 0);
        assert_eq!(report.boundary_points, 1);
        assert!((grid.total_deposited()).abs() < 1e-9);
    }

    #[test]
    fn scratch_sets_reset_between_pulses() {
        let grid = Arc::new(FixtureGrid::open(9, 9));
        let mut processor = processor(&grid);
        let strength = (75.0 * std::f64::consts::PI) as f32;
        let pulse = Pulse::new(WorldPoint::new(4, 4, 0), strength, SourceId(1));

        let first = processor.process(&pulse);
        grid.clear_deposits();
        let second = processor.process(&pulse);

        assert_eq!(first, second);
        assert!((grid.deposited_at(4, 4) - strength).abs() < 1e-3);
    }

    #[test]
    fn each_node_gets_exactly_one_deposit_per_pulse() {
        let grid = Arc::new(FixtureGrid::open(31, 31));
        let mut processor = processor(&grid);
        let strength = (6.0 * 75.0 * std::f64::consts::PI) as f32;

        let report = processor.process(&Pulse::new(
            WorldPoint::new(15, 15, 0),
            strength,
            SourceId(4),
        ));

        assert_eq!(grid.deposit_count(), report.nodes_deposited);
    }
}
