//! Discrete circle boundary generation.
//!
//! Integer midpoint circle rasterization with 8-way symmetry. The output
//! set is deduplicated: octants overlap on the axes and diagonals,
//! particularly at small radii, and every boundary point must receive its
//! attenuated share of a pulse exactly once.

use indexmap::IndexSet;
use roentgen_core::CellPoint;

/// Hard cap on the rasterized radius regardless of pulse strength.
///
/// Bounds worst-case per-pulse cost: at radius 50 the boundary holds a
/// few hundred distinct points at most.
pub const MAX_RADIUS: i32 = 50;

/// Generate the discrete boundary of a circle into `out`.
///
/// `radius` is clamped to `[0, MAX_RADIUS]`; radius 0 collapses to the
/// center point itself. `out` is not cleared first — callers reuse it as
/// scratch across pulses and clear it between them.
pub fn circle_boundary(center: CellPoint, radius: i32, out: &mut IndexSet<CellPoint>) {
    let r = radius.clamp(0, MAX_RADIUS);
    if r == 0 {
        out.insert(center);
        return;
    }

    let mut x = 0;
    let mut y = r;
    let mut d = 3 - 2 * r;
    emit_octants(center, x, y, out);
    while y >= x {
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
        emit_octants(center, x, y, out);
    }
}

/// Insert the 8 symmetric reflections of `(x, y)` around `center`.
fn emit_octants(c: CellPoint, x: i32, y: i32, out: &mut IndexSet<CellPoint>) {
    out.insert(CellPoint::new(c.x + x, c.y + y));
    out.insert(CellPoint::new(c.x - x, c.y + y));
    out.insert(CellPoint::new(c.x + x, c.y - y));
    out.insert(CellPoint::new(c.x - x, c.y - y));
    out.insert(CellPoint::new(c.x + y, c.y + x));
    out.insert(CellPoint::new(c.x - y, c.y + x));
    out.insert(CellPoint::new(c.x + y, c.y - x));
    out.insert(CellPoint::new(c.x - y, c.y - x));
}
