#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::shape::Shape;
use crate::viewport::Point;

/// Index of the topmost shape containing `pt`, if any.
///
/// Shapes are tested from the end of the slice backwards, so a later
/// insertion wins wherever shapes overlap. This mirrors the draw order,
/// which paints from the front of the slice forwards.
#[must_use]
pub fn hit_test(shapes: &[Shape], pt: Point) -> Option<usize> {
    shapes.iter().rposition(|s| s.contains(pt))
}
