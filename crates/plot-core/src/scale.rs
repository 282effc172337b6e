// File: crates/plot-core/src/scale.rs
// Summary: Linear value-to-pixel scale transforms for the plot axes.

/// Maps a value range onto a pixel range. The pixel endpoints may run in
/// either direction, so the same type serves the X axis (left to right)
/// and the Y axis (bottom to top).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    v0: f64,
    v1: f64,
    px0: f32,
    px1: f32,
}

impl LinearScale {
    pub fn new(v0: f64, v1: f64, px0: f32, px1: f32) -> Self {
        let mut s = Self { v0, v1, px0, px1 };
        // Degenerate value spans would map everything onto one pixel.
        if (s.v1 - s.v0).abs() < 1e-12 {
            s.v1 = s.v0 + 1.0;
        }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let frac = (v - self.v0) / (self.v1 - self.v0);
        self.px0 + frac as f32 * (self.px1 - self.px0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.px1 - self.px0;
        let frac = if span.abs() < 1e-6 { 0.0 } else { (px - self.px0) / span };
        self.v0 + frac as f64 * (self.v1 - self.v0)
    }
}
