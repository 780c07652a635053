//! Attenuated ray tracing over a tile grid.

use indexmap::IndexMap;
use roentgen_core::{CellPoint, Layer, NodeId, TileGrid, WorldPoint};

use crate::line::LineWalk;

/// Walk the ray `from → to` on the `z` plane, attenuating `strength`
/// through every non-underfloor layer and accumulating the per-node
/// contribution into `deposits`.
///
/// Points that resolve to no node (map edges, uninstantiated regions) are
/// skipped without attenuating the ray. A node crossed by several rays
/// accumulates every pass; the engine commits the total once per pulse.
///
/// Attenuation is applied at the visited node itself before accumulation,
/// so a blocking tile still receives the pre-block share while everything
/// beyond it receives the reduced one. The running strength is
/// monotonically non-increasing along the ray.
///
/// `min_strength` short-circuits the walk once the running strength falls
/// below it. 0.0 disables the cutoff; the walk then always reaches `to`
/// even when the strength has underflowed to nothing, which is the
/// reference behavior.
pub fn trace_attenuated(
    grid: &dyn TileGrid,
    from: CellPoint,
    to: CellPoint,
    z: i32,
    strength: f32,
    min_strength: f32,
    deposits: &mut IndexMap<NodeId, f32>,
) {
    let mut remaining = strength;
    for p in LineWalk::new(from, to) {
        if remaining < min_strength {
            break;
        }
        let world = WorldPoint::new(p.x, p.y, z);
        let Some(node) = grid.resolve(world) else {
            continue;
        };
        for (layer, coefficient) in grid.layer_passability(world) {
            if layer == Layer::Underfloor {
                continue;
            }
            remaining *= coefficient;
        }
        *deposits.entry(node).or_insert(0.0) += remaining;
    }
}
