//! Canvas geometry.

pub use nalgebra;

/// A position on the rig canvas, in scene units.
pub type Point2 = nalgebra::Point2<f64>;

/// Mirrors `point` across the vertical line `x = line_x`.
pub fn reflect_across_vertical(point: &Point2, line_x: f64) -> Point2 {
    Point2::new(line_x - (point.x - line_x), point.y)
}
