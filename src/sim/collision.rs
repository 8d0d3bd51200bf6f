//! Collision detection between vehicles
//!
//! Plain bounding-box overlap; vehicles never rotate.

use super::rect::Rect;

/// Check whether two rectangles overlap
///
/// Uses strict inequalities, so rectangles that only share an edge
/// do not collide.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x() < b.right() && a.right() > b.x() && a.y() < b.bottom() && a.bottom() > b.y()
}
