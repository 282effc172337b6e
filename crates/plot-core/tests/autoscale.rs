// File: crates/plot-core/tests/autoscale.rs
// Purpose: Validate autoscale over multiple series and degenerate inputs.

use plot_core::{Chart, Series};

#[test]
fn autoscale_multiple_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("a", vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::with_data("b", vec![(2.0, 0.5), (3.0, 6.0)]));

    chart.autoscale_axes(0.0);

    // X spans 0..5 from series a vs 2..3 from series b => expect ~0..5
    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);

    // Y min 0.5 from b, y max 6.0 from b
    assert!(chart.y_axis.min <= 0.5 + 1e-9);
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn autoscale_y_margin() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("a", vec![(0.0, 0.0), (10.0, 100.0)]));

    chart.autoscale_axes(0.05);

    // 5% of the 0..100 span padded on both ends
    assert!((chart.y_axis.min - (-5.0)).abs() < 1e-9);
    assert!((chart.y_axis.max - 105.0).abs() < 1e-9);
}

#[test]
fn autoscale_no_data_falls_back() {
    let mut chart = Chart::new();
    chart.add_series(Series::new("empty"));

    chart.autoscale_axes(0.05);

    // No finite points: axes fall back to a renderable 0..1 range.
    assert!(chart.x_axis.max > chart.x_axis.min);
    assert!(chart.y_axis.max > chart.y_axis.min);
}

#[test]
fn autoscale_single_point_expands() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("one", vec![(3.0, 7.0)]));

    chart.autoscale_axes(0.0);

    // A zero-width span is widened so the scale stays invertible.
    assert!(chart.x_axis.max > chart.x_axis.min);
    assert!(chart.y_axis.max > chart.y_axis.min);
}
