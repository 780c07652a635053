//! Integer line rasterization.

use roentgen_core::CellPoint;

/// Bresenham line walk from `from` to `to`, inclusive of both endpoints.
///
/// Visits every cell a traced ray passes through, in order from origin to
/// target. Termination is the standard endpoint check, so the iterator is
/// always finite.
#[derive(Clone, Debug)]
pub struct LineWalk {
    cur: CellPoint,
    to: CellPoint,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl LineWalk {
    /// Start a walk between two cells.
    pub fn new(from: CellPoint, to: CellPoint) -> Self {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let err = (if dx > dy { dx } else { -dy }) / 2;
        Self {
            cur: from,
            to,
            dx,
            dy,
            sx,
            sy,
            err,
            done: false,
        }
    }
}

impl Iterator for LineWalk {
    type Item = CellPoint;

    fn next(&mut self) -> Option<CellPoint> {
        if self.done {
            return None;
        }
        let out = self.cur;
        if self.cur == self.to {
            self.done = true;
        } else {
            let e2 = self.err;
            if e2 > -self.dx {
                self.err -= self.dy;
                self.cur.x += self.sx;
            }
            if e2 < self.dy {
                self.err += self.dx;
                self.cur.y += self.sy;
            }
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(from: (i32, i32), to: (i32, i32)) -> Vec<CellPoint> {
        LineWalk::new(CellPoint::new(from.0, from.1), CellPoint::new(to.0, to.1)).collect()
    }

    #[test]
    fn degenerate_line_is_one_point() {
        assert_eq!(walk((4, 4), (4, 4)), vec![CellPoint::new(4, 4)]);
    }

    #[test]
    fn horizontal_line_visits_every_cell() {
        let pts = walk((0, 2), (4, 2));
        let expected: Vec<_> = (0..=4).map(|x| CellPoint::new(x, 2)).collect();
        assert_eq!(pts, expected);
    }

    #[test]
    fn diagonal_line_steps_both_axes() {
        let pts = walk((0, 0), (3, 3));
        let expected: Vec<_> = (0..=3).map(|i| CellPoint::new(i, i)).collect();
        assert_eq!(pts, expected);
    }

    #[test]
    fn endpoints_are_inclusive_in_both_directions() {
        for (from, to) in [((0, 0), (5, 2)), ((5, 2), (0, 0)), ((-3, 7), (2, -1))] {
            let pts = walk(from, to);
            assert_eq!(pts.first(), Some(&CellPoint::new(from.0, from.1)));
            assert_eq!(pts.last(), Some(&CellPoint::new(to.0, to.1)));
        }
    }

    #[test]
    fn steps_are_always_adjacent() {
        let pts = walk((-10, 3), (15, -8));
        for pair in pts.windows(2) {
            let dx = (pair[1].x - pair[0].x).abs();
            let dy = (pair[1].y - pair[0].y).abs();
            assert!(dx <= 1 && dy <= 1 && dx + dy >= 1, "jump from {} to {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn length_matches_chebyshev_distance() {
        let pts = walk((2, 2), (9, -4));
        // Bresenham visits max(|dx|, |dy|) + 1 cells.
        assert_eq!(pts.len(), 8);
    }
}
