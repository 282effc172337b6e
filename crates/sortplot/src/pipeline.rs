// File: crates/sortplot/src/pipeline.rs
// Summary: Loads a case's CSV, builds both charts, saves PNGs, and optionally shows them.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, warn};
use plot_core::{theme, Axis, Chart, RenderOptions, Series};

use crate::cases::BenchCase;
use crate::charts::ChartSpec;
use crate::display;
use crate::table::{BenchmarkTable, TableError};

// 10x6 inch figure at 300 dpi; scale keeps strokes and fonts proportional.
const OUT_WIDTH: i32 = 3000;
const OUT_HEIGHT: i32 = 1800;
const PIXEL_RATIO: f32 = 3.0;
const Y_MARGIN: f64 = 0.05;

pub struct RenderSettings {
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
    /// Read this file instead of `data_dir/<case data file>`.
    pub input_override: Option<PathBuf>,
    pub theme: String,
    pub show: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            out_dir: PathBuf::from("."),
            input_override: None,
            theme: "light".to_string(),
            show: false,
        }
    }
}

/// Build one chart from a loaded table. Every series projects
/// (ArraySize, column) pairs in row order; axes are fit to the data.
pub fn build_chart(spec: &ChartSpec, table: &BenchmarkTable) -> Result<Chart, TableError> {
    let mut chart = Chart::new();
    chart.title = Some(spec.title.clone());
    chart.x_axis = Axis::new(spec.x_label, 0.0, 1.0);
    chart.y_axis = Axis::new(spec.y_label.clone(), 0.0, 1.0);
    for s in &spec.series {
        let points = table.points(s.column)?;
        let mut series = Series::with_data(s.label, points).with_marker(s.marker);
        if let Some(color) = s.color.and_then(theme::parse_hex) {
            series = series.with_color(color);
        }
        chart.add_series(series);
    }
    chart.autoscale_axes(Y_MARGIN);
    Ok(chart)
}

pub fn render_options(theme_name: &str) -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.width = OUT_WIDTH;
    opts.height = OUT_HEIGHT;
    opts.scale = PIXEL_RATIO;
    opts.theme = theme::find(theme_name);
    opts
}

/// Render a case's comparison and swaps charts, returning the written paths.
/// All charts are built before the first PNG is written, so a bad input file
/// never leaves partial output behind.
pub fn render_case(case: BenchCase, settings: &RenderSettings) -> Result<Vec<PathBuf>> {
    let data_path = input_path(case, settings);
    let table = BenchmarkTable::load(&data_path)?;
    debug!("{}: {} rows from {}", case.key(), table.len(), data_path.display());
    if table.is_empty() {
        warn!("{} has no data rows; charts will be empty", data_path.display());
    }

    let specs = case.chart_specs();
    let mut charts = Vec::with_capacity(specs.len());
    for spec in &specs {
        charts.push(build_chart(spec, &table)?);
    }

    let opts = render_options(&settings.theme);
    std::fs::create_dir_all(&settings.out_dir)
        .with_context(|| format!("creating {}", settings.out_dir.display()))?;

    let mut written = Vec::with_capacity(charts.len());
    for (spec, chart) in specs.iter().zip(&charts) {
        let out = settings.out_dir.join(&spec.file_name);
        chart
            .render_to_png(&opts, &out)
            .with_context(|| format!("writing {}", out.display()))?;
        println!("Saved {} plot as: {}", spec.kind.save_noun(), out.display());
        written.push(out);
    }

    if settings.show {
        show_all(&written);
    }
    Ok(written)
}

// Viewer problems never fail the run; once the display is known to be
// missing, stop trying.
fn show_all(paths: &[PathBuf]) {
    for path in paths {
        match display::show_image(path) {
            Ok(()) => {}
            Err(display::DisplayError::Unavailable) => {
                warn!("no display available; charts were saved but not shown");
                return;
            }
            Err(e) => {
                warn!("could not show {}: {e}", path.display());
            }
        }
    }
}

/// Resolve the CSV a case reads: the explicit override if given,
/// otherwise the conventional file name inside `data_dir`.
pub fn input_path(case: BenchCase, settings: &RenderSettings) -> PathBuf {
    settings
        .input_override
        .clone()
        .unwrap_or_else(|| settings.data_dir.join(case.data_file()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_options_match_figure_size() {
        let opts = render_options("light");
        assert_eq!(opts.width, 3000);
        assert_eq!(opts.height, 1800);
        assert!((opts.scale - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn input_path_prefers_override() {
        let mut settings = RenderSettings::default();
        settings.data_dir = PathBuf::from("/data");
        assert_eq!(
            input_path(BenchCase::Min, &settings),
            PathBuf::from("/data/sorting_min_data.csv")
        );
        settings.input_override = Some(PathBuf::from("other.csv"));
        assert_eq!(input_path(BenchCase::Min, &settings), PathBuf::from("other.csv"));
    }
}
