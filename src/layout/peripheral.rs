use std::f64::consts::TAU;

use crate::foundation::core::{Canvas, Point, Size};
use crate::foundation::math::RandomSource;

/// Off-canvas left-top position for a word of `rect_size`.
///
/// The word's center lands on the circle around the canvas center whose radius
/// is half of (canvas diagonal + word diagonal), so the word never overlaps the
/// visible canvas. The angle is `rng.next_f64() * 2π`.
pub fn place_peripheral(canvas: Canvas, rect_size: Size, rng: &mut dyn RandomSource) -> Point {
    let radius = (canvas.diagonal() + rect_size.width.hypot(rect_size.height)) / 2.0;
    let angle = rng.next_f64() * TAU;
    let center = canvas.center();
    Point::new(
        center.x + radius * angle.cos() - rect_size.width / 2.0,
        center.y + radius * angle.sin() - rect_size.height / 2.0,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layout/peripheral.rs"]
mod tests;
