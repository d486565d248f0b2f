use crate::math::{Point2, reflect_across_vertical};

/// Vertical line guide markers are mirrored across.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectionLine {
    pub x: f64,
    /// Whether the line may be dragged.
    pub adjustable: bool,
    pub visible: bool,
}

impl ReflectionLine {
    /// A line through the middle of a canvas `width` wide.
    pub fn centered(width: f64) -> Self {
        Self {
            x: width / 2.0,
            adjustable: true,
            visible: true,
        }
    }

    pub fn reflect(&self, point: &Point2) -> Point2 {
        reflect_across_vertical(point, self.x)
    }
}
