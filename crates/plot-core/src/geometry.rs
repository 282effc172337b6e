// File: crates/plot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
    pub const fn center_x(&self) -> i32 { self.left + self.width() / 2 }
    pub const fn center_y(&self) -> i32 { self.top + self.height() / 2 }

    /// Shrink a surface rect by insets scaled with the device pixel ratio.
    /// Collapses to a zero-size rect at the center rather than inverting.
    pub fn inset_scaled(&self, insets: &Insets, scale: f32) -> Self {
        let px = |v: u32| (v as f32 * scale).round() as i32;
        let mut r = Self {
            left: self.left + px(insets.left),
            top: self.top + px(insets.top),
            right: self.right - px(insets.right),
            bottom: self.bottom - px(insets.bottom),
        };
        if r.right < r.left {
            let c = self.center_x();
            r.left = c;
            r.right = c;
        }
        if r.bottom < r.top {
            let c = self.center_y();
            r.top = c;
            r.bottom = c;
        }
        r
    }
}
