//! Overlap tests between points and axis-aligned rectangles.

use crate::foundation::core::{Point, Rect};

/// Strict containment: points on an edge are outside.
pub fn point_hits_rect(point: Point, rect: &Rect) -> bool {
    rect.x0 < point.x && point.x < rect.x1 && rect.y0 < point.y && point.y < rect.y1
}

/// Closed AABB test: rectangles sharing an edge or corner count as hitting.
pub fn rects_hit(a: &Rect, b: &Rect) -> bool {
    !(a.x1 < b.x0 || a.x0 > b.x1 || a.y1 < b.y0 || a.y0 > b.y1)
}

/// Open AABB test: only a positive-area intersection counts.
pub fn rects_overlap_strict(a: &Rect, b: &Rect) -> bool {
    a.x0 < b.x1 && a.x1 > b.x0 && a.y0 < b.y1 && a.y1 > b.y0
}

/// Whether `rect` strictly overlaps any of `rects`.
pub fn rect_overlaps_any(rect: &Rect, rects: &[Rect]) -> bool {
    rects.iter().any(|r| rects_overlap_strict(rect, r))
}

/// First pair `(i, j)` with `i < j` whose rectangles hit under the closed test.
pub fn first_hitting_pair(rects: &[Rect]) -> Option<(usize, usize)> {
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            if rects_hit(&rects[i], &rects[j]) {
                return Some((i, j));
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/collision.rs"]
mod tests;
