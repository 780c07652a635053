//! Integer grid coordinates.
//!
//! The simulation is fixed at two spatial dimensions plus a vertical
//! layer index, so concrete structs are used rather than a generic
//! coordinate container.

use std::fmt;

/// A 2D cell coordinate on the tile grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl CellPoint {
    /// Construct a cell point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another cell.
    pub fn distance_to(self, other: CellPoint) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for CellPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A 3D world coordinate: grid cell plus vertical layer index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorldPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Vertical layer (z plane).
    pub z: i32,
}

impl WorldPoint {
    /// Construct a world point.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The horizontal cell this point sits on.
    pub const fn xy(self) -> CellPoint {
        CellPoint::new(self.x, self.y)
    }
}

impl fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
