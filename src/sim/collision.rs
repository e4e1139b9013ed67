//! Collision detection
//!
//! Everything in the arena is an axis-aligned rectangle, so one overlap test
//! covers player vs. obstacle.

use super::state::Rect;

/// Check whether two rectangles overlap
///
/// Rectangles overlap unless one lies entirely left, right, above or below the
/// other. Comparisons are strict: rectangles that only share an edge do not
/// collide.
#[inline]
pub fn check_collision(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}
