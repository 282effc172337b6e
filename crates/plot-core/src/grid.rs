// File: crates/plot-core/src/grid.rs
// Summary: Tick layout helpers: nice step selection, tick positions, labels.

/// Pick a grid step of the form 1/2/5 x 10^k so that `span / step` lands
/// near `target` divisions.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let factor = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * mag
}

/// Tick positions: multiples of the nice step inside [min, max].
pub fn ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Vec::new();
    }
    let step = nice_step(max - min, target);
    let mut out = Vec::new();
    let mut t = (min / step).ceil() * step;
    // Tolerance keeps the final tick when float error pushes it past max.
    while t <= max + step * 1e-9 {
        out.push(t);
        t += step;
    }
    out
}

/// Render a tick value with just enough decimals for the given step.
pub fn format_tick(v: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{}", v.round() as i64)
    } else {
        let decimals = (-step.log10().floor()) as usize;
        format!("{v:.decimals$}")
    }
}
