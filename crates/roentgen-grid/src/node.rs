//! Per-node radiation state with decay bookkeeping.

use std::time::{Duration, SystemTime};

use roentgen_core::SourceId;

/// Exponential decay configuration for node radiation levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecayConfig {
    /// Time for an undisturbed level to halve. Must be non-zero.
    pub half_life: Duration,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            half_life: Duration::from_secs(10),
        }
    }
}

/// Radiation bookkeeping for one grid node.
///
/// The stored level is exact as of `updated_at`; reads project it forward
/// with exponential decay without mutating, and deposits fold the decay in
/// before adding. Timestamps earlier than the last update are treated as
/// zero elapsed time, so a skewed clock never amplifies the level.
#[derive(Clone, Copy, Debug)]
pub struct RadiationNode {
    level: f32,
    updated_at: SystemTime,
    source: Option<SourceId>,
}

impl RadiationNode {
    pub(crate) fn new(created_at: SystemTime) -> Self {
        Self {
            level: 0.0,
            updated_at: created_at,
            source: None,
        }
    }

    /// The level as of `now`, decayed from the last update.
    pub fn level_at(&self, now: SystemTime, decay: DecayConfig) -> f32 {
        let elapsed = now.duration_since(self.updated_at).unwrap_or_default();
        if elapsed.is_zero() {
            return self.level;
        }
        let halvings = elapsed.as_secs_f64() / decay.half_life.as_secs_f64();
        (f64::from(self.level) * 0.5f64.powf(halvings)) as f32
    }

    /// Fold decay up to `timestamp`, add `amount`, and re-stamp.
    pub(crate) fn deposit(
        &mut self,
        amount: f32,
        timestamp: SystemTime,
        source: SourceId,
        decay: DecayConfig,
    ) {
        self.level = self.level_at(timestamp, decay) + amount;
        self.updated_at = timestamp;
        self.source = Some(source);
    }

    /// Raw stored level, without projecting decay forward.
    pub fn level(&self) -> f32 {
        self.level
    }

    /// When the node last received a deposit.
    pub fn updated_at(&self) -> SystemTime {
        self.updated_at
    }

    /// The last emitter that deposited here, if any.
    pub fn source(&self) -> Option<SourceId> {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: SystemTime = SystemTime::UNIX_EPOCH;

    fn at(seconds: u64) -> SystemTime {
        T0 + Duration::from_secs(seconds)
    }

    #[test]
    fn fresh_node_is_clean() {
        let node = RadiationNode::new(T0);
        assert_eq!(node.level(), 0.0);
        assert_eq!(node.source(), None);
    }

    #[test]
    fn deposit_is_additive_and_attributed() {
        let decay = DecayConfig::default();
        let mut node = RadiationNode::new(T0);
        node.deposit(4.0, at(0), SourceId(7), decay);
        node.deposit(2.0, at(0), SourceId(9), decay);
        assert!((node.level() - 6.0).abs() < 1e-6);
        assert_eq!(node.source(), Some(SourceId(9)));
        assert_eq!(node.updated_at(), at(0));
    }

    #[test]
    fn level_halves_per_half_life() {
        let decay = DecayConfig {
            half_life: Duration::from_secs(5),
        };
        let mut node = RadiationNode::new(T0);
        node.deposit(8.0, at(0), SourceId(1), decay);

        assert!((node.level_at(at(5), decay) - 4.0).abs() < 1e-5);
        assert!((node.level_at(at(10), decay) - 2.0).abs() < 1e-5);
        // Projection does not mutate.
        assert!((node.level() - 8.0).abs() < 1e-6);
    }

    #[test]
    fn deposit_folds_pending_decay_in() {
        let decay = DecayConfig {
            half_life: Duration::from_secs(5),
        };
        let mut node = RadiationNode::new(T0);
        node.deposit(8.0, at(0), SourceId(1), decay);
        node.deposit(1.0, at(5), SourceId(1), decay);
        assert!((node.level() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn past_timestamps_do_not_amplify() {
        let decay = DecayConfig::default();
        let mut node = RadiationNode::new(at(100));
        node.deposit(3.0, at(100), SourceId(1), decay);
        // A query dated before the last update sees the stored level as-is.
        assert!((node.level_at(at(50), decay) - 3.0).abs() < 1e-6);
    }
}
