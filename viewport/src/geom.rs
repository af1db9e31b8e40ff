#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in screen (CSS pixel) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Width/height pair in CSS pixels or image pixels, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero, negative or not finite.
    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    /// Multiply both dimensions by `factor`.
    #[must_use]
    pub fn scale(self, factor: f64) -> Size {
        Size { width: self.width * factor, height: self.height * factor }
    }

    /// Scale `self` down (never up) so it fits inside `bounds`, keeping the aspect ratio.
    ///
    /// This is the layout box an image receives in its container before any zoom is applied.
    /// Empty inputs produce an empty size.
    #[must_use]
    pub fn fit_within(self, bounds: Size) -> Size {
        if self.is_empty() || bounds.is_empty() {
            return Size::default();
        }
        let factor = (bounds.width / self.width).min(bounds.height / self.height).min(1.0);
        self.scale(factor)
    }
}
