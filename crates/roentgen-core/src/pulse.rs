//! The radiation pulse value type.

use crate::id::SourceId;
use crate::point::WorldPoint;

/// A single radiation emission event.
///
/// Immutable once created: a producer constructs one per emission, the
/// engine consumes it exactly once and discards it. Non-positive strength
/// is not rejected; it degenerates to a single-point boundary that
/// deposits nothing of consequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    /// Grid cell (plus vertical layer) the emission originates from.
    pub location: WorldPoint,
    /// Total emission strength, divided across boundary rays.
    pub strength: f32,
    /// Emitter attribution, passed through to node deposits.
    pub source: SourceId,
}

impl Pulse {
    /// Construct a pulse.
    pub const fn new(location: WorldPoint, strength: f32, source: SourceId) -> Self {
        Self {
            location,
            strength,
            source,
        }
    }
}
