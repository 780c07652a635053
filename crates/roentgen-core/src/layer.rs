//! Tile map layers.

use std::fmt;

/// The stacked layers a tile map cell may carry.
///
/// Each layer present at a point contributes a passability coefficient to
/// ray attenuation, except [`Layer::Underfloor`]: piping and wiring under
/// the floor never block radiation, so the trace kernel skips that layer
/// even if an adapter reports a coefficient for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Bedrock / station plating.
    Base,
    /// Walkable floor tiles.
    Floor,
    /// Solid walls.
    Wall,
    /// Windows (partially attenuating).
    Window,
    /// Placed objects (crates, machines).
    Object,
    /// Under-floor infrastructure; ignored for attenuation.
    Underfloor,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Base => "base",
            Self::Floor => "floor",
            Self::Wall => "wall",
            Self::Window => "window",
            Self::Object => "object",
            Self::Underfloor => "underfloor",
        };
        write!(f, "{name}")
    }
}
