//! The tile-grid adapter contract consumed by the propagation engine.

use std::time::SystemTime;

use smallvec::SmallVec;

use crate::error::DepositError;
use crate::id::{NodeId, SourceId};
use crate::layer::Layer;
use crate::point::WorldPoint;

/// Per-point stack of layers and their radiation passability coefficients.
///
/// Coefficients are in `(0, 1]`: 1.0 is fully passable, smaller values
/// attenuate. Four inline slots cover typical tile stacks without heap
/// allocation.
pub type LayerStack = SmallVec<[(Layer, f32); 4]>;

/// Grid access adapter: resolves world coordinates to nodes, reports
/// per-layer passability, and accepts radiation deposits.
///
/// Implementations must make [`resolve`](TileGrid::resolve) and
/// [`layer_passability`](TileGrid::layer_passability) safe to call from
/// the tick worker while other threads read node state, and must
/// serialize concurrent `deposit` calls internally. The engine performs
/// exactly one deposit per node per pulse and never retries a failure.
pub trait TileGrid {
    /// Map a world coordinate to a node, or `None` if nothing is there
    /// (out of bounds, no instantiated tile). Unresolvable points are
    /// skipped by the trace kernel without attenuating the ray.
    fn resolve(&self, point: WorldPoint) -> Option<NodeId>;

    /// Every layer present at `point` with its passability coefficient.
    ///
    /// May include [`Layer::Underfloor`]; the trace kernel ignores it.
    fn layer_passability(&self, point: WorldPoint) -> LayerStack;

    /// Add `amount` to the node's running radiation level, stamping the
    /// update time and the emitting source.
    fn deposit(
        &self,
        node: NodeId,
        amount: f32,
        timestamp: SystemTime,
        source: SourceId,
    ) -> Result<(), DepositError>;
}
