// File: crates/visualize-core/src/geometry.rs
// Summary: Plot area placement on the surface (margins, integer rects) and clamping.

use serde::{Deserialize, Serialize};

/// Margins between the surface edge and the plot area, in pixels.
/// Axis labels, the title and the legend are painted inside them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // left: y labels, top: title, bottom: x labels + legend
        Self::new(64, 32, 40, 84)
    }
}

/// Integer pixel rectangle, right/bottom exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    /// `None` when the right or bottom edge overflows `i32`.
    pub fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Option<Self> {
        Some(Self { left, top, right: left.checked_add(width)?, bottom: top.checked_add(height)? })
    }

    /// Plot area of `width` x `height` (rounded up to whole pixels) placed inside `insets`.
    /// `None` when the area does not fit integer pixel coordinates.
    pub fn plot_area(width: f32, height: f32, insets: &Insets) -> Option<Self> {
        Self::from_ltwh(
            i32::try_from(insets.left).ok()?,
            i32::try_from(insets.top).ok()?,
            whole_pixels(width)?,
            whole_pixels(height)?,
        )
    }

    /// Surface size holding this plot area plus `insets` on every side.
    pub fn surface_size(&self, insets: &Insets) -> Option<(i32, i32)> {
        let w = self.right.checked_add(i32::try_from(insets.right).ok()?)?;
        let h = self.bottom.checked_add(i32::try_from(insets.bottom).ok()?)?;
        Some((w, h))
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

fn whole_pixels(v: f32) -> Option<i32> {
    let v = v.ceil();
    (v >= 0.0 && v < i32::MAX as f32).then_some(v as i32)
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_wraps_plot_in_insets() {
        let insets = Insets::new(64, 32, 40, 84);
        let plot = RectI32::plot_area(639.5, 360.0, &insets).unwrap();
        assert_eq!((plot.left, plot.top, plot.width(), plot.height()), (64, 40, 640, 360));
        assert_eq!(plot.surface_size(&insets), Some((736, 484)));
    }

    #[test]
    fn oversized_plot_does_not_fit() {
        let insets = Insets::default();
        assert_eq!(RectI32::plot_area(1e10, 100.0, &insets), None);
        assert_eq!(RectI32::plot_area(100.0, 3e9, &insets), None);
        // fits on its own, overflows once the right inset is added
        let wide = Insets::new(0, 200, 0, 0);
        let plot = RectI32::plot_area(2_147_483_520.0, 10.0, &wide).unwrap();
        assert_eq!(plot.surface_size(&wide), None);
    }

    #[test]
    fn clamp_keeps_zero_line_inside_range() {
        assert_eq!(clamp(0.0, 5.0, 9.0), 5.0);
        assert_eq!(clamp(0.0, -5.0, 9.0), 0.0);
        assert_eq!(clamp(0.0, -9.0, -5.0), -5.0);
    }
}
