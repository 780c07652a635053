//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a grid node within a tile map.
///
/// Node IDs are assigned by the grid implementation and are opaque to the
/// propagation engine; `MapGrid` uses row-major cell indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies the emitter of a pulse.
///
/// Carried through to node deposits so that downstream decay bookkeeping
/// can attribute the most recent contribution to its source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(pub i32);

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for SourceId {
    fn from(v: i32) -> Self {
        Self(v)
    }
}
