use crate::foundation::error::{CloudError, CloudResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Output canvas in pixels. Coordinates grow rightward (x) and downward (y).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Canvas {
    /// Build a canvas, rejecting non-positive or non-finite extents.
    pub fn new(width: f64, height: f64) -> CloudResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Check that both extents are finite and strictly positive.
    pub fn validate(&self) -> CloudResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(CloudError::validation("canvas width must be > 0"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(CloudError::validation("canvas height must be > 0"));
        }
        Ok(())
    }

    /// Canvas center point.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Length of the canvas diagonal.
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// The visible area as a rectangle anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Rectangle of `size` whose left-top corner sits at `left_top`.
pub fn rect_at(left_top: Point, size: Size) -> Rect {
    Rect::from_origin_size(left_top, size)
}

/// Rectangle of `size` centered on `center`.
pub fn rect_centered(center: Point, size: Size) -> Rect {
    Rect::from_center_size(center, size)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
