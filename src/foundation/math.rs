use crate::foundation::core::{Canvas, Point};

/// Map a percentage coordinate (`0..=100`, 50 = center) onto a pixel dimension.
#[inline]
pub fn percent_to_px(percent: f64, dimension_px: f64) -> f64 {
    (percent / 100.0) * dimension_px
}

/// Pixel anchor for a percentage position on `canvas`.
///
/// Node anchors and packet path endpoints both go through here so they can never disagree.
#[inline]
pub fn anchor_px(x_percent: f64, y_percent: f64, canvas: Canvas) -> Point {
    Point::new(
        percent_to_px(x_percent, canvas.width_f64()),
        percent_to_px(y_percent, canvas.height_f64()),
    )
}

/// Clamp a percentage coordinate into `[0, 100]`; non-finite input lands on the center.
pub(crate) fn clamp_percent(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 100.0) } else { 50.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
