// File: crates/plot-core/src/series.rs
// Summary: Line series model: name, points, marker symbol, color override.

use skia_safe as skia;

/// Point marker drawn on top of the connecting line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    TriangleUp,
    Diamond,
}

#[derive(Clone)]
pub struct Series {
    /// Legend label. An empty name keeps the series out of the legend.
    pub name: String,
    pub data_xy: Vec<(f64, f64)>,
    pub marker: Option<Marker>,
    /// Explicit color; `None` falls back to the theme palette slot for the
    /// series index.
    pub color: Option<skia::Color>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), data_xy: Vec::new(), marker: None, color: None }
    }

    pub fn with_data(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), data_xy: data, marker: None, color: None }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }
}
