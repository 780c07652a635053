//! Engine configuration and validation.

use std::error::Error;
use std::fmt;

/// Configuration for [`RadiationSimulation`](crate::sim::RadiationSimulation).
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Minimum milliseconds per tick. An overrunning tick rolls straight
    /// into the next one. Default: 100.
    pub tick_delay_ms: u64,
    /// Whether this process is the authoritative simulation host.
    /// `start()` and `stop()` are silent no-ops when false. Default: true.
    pub authoritative: bool,
    /// Optional ray cutoff: a trace stops once its running strength falls
    /// below this value. 0.0 disables the cutoff, so rays always reach
    /// their boundary point even after the strength has underflowed to
    /// nothing (the reference behavior). Must be finite and non-negative.
    pub min_trace_strength: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_delay_ms: 100,
            authoritative: true,
            min_trace_strength: 0.0,
        }
    }
}

impl EngineConfig {
    /// Check structural invariants before the engine is constructed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_trace_strength.is_finite() || self.min_trace_strength < 0.0 {
            return Err(ConfigError::InvalidMinTraceStrength {
                value: self.min_trace_strength,
            });
        }
        Ok(())
    }
}

/// Errors detected during [`EngineConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `min_trace_strength` is negative, NaN, or infinite.
    InvalidMinTraceStrength {
        /// The invalid value.
        value: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMinTraceStrength { value } => {
                write!(f, "min_trace_strength must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
