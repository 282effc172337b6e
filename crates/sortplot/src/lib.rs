// File: crates/sortplot/src/lib.rs
// Summary: Library surface for benchmark chart rendering and data generation.

pub mod algorithms;
pub mod cases;
pub mod charts;
pub mod display;
pub mod generator;
pub mod pipeline;
pub mod table;

pub use cases::BenchCase;
pub use charts::{Algorithm, ChartKind, ChartSpec, SeriesSpec, ALGORITHMS};
pub use pipeline::{build_chart, render_case, RenderSettings};
pub use table::{BenchmarkTable, TableError};
