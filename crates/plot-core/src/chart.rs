// File: crates/plot-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::axis::Axis;
use crate::error::RenderError;
use crate::geometry::RectI32;
use crate::grid;
use crate::scale::LinearScale;
use crate::series::{Marker, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const TITLE_SIZE: f32 = 16.0;
const LABEL_SIZE: f32 = 13.0;
const TICK_SIZE: f32 = 11.0;
const LEGEND_SIZE: f32 = 12.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Device pixel ratio applied to strokes, fonts, markers, and insets.
    pub scale: f32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable to skip all text (titles, labels, legend); keeps renders
    /// deterministic across platforms with different fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            scale: 1.0,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: Option<String>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            title: None,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Derive axis ranges from the series data. The y range is padded by
    /// `y_margin_frac` on both ends; charts with no finite data points fall
    /// back to 0..1 so an empty table still renders a valid image.
    pub fn autoscale_axes(&mut self, y_margin_frac: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &self.series {
            for &(x, y) in &s.data_xy {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            x_min = 0.0;
            x_max = 1.0;
            y_min = 0.0;
            y_max = 1.0;
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        let ym = (y_max - y_min) * y_margin_frac;
        self.x_axis.min = x_min;
        self.x_axis.max = x_max;
        self.y_axis.min = y_min - ym;
        self.y_axis.max = y_max + ym;
    }

    /// Render into an RGBA8 buffer; returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let width = opts.width.max(1);
        let height = opts.height.max(1);
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(RenderError::Surface { width, height })?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = width as usize * 4;
        let mut pixels = vec![0u8; stride * height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::Readback);
        }
        Ok((pixels, width, height, stride))
    }

    /// Render and PNG-encode in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let (pixels, width, height, _stride) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(width as u32, height as u32, pixels)
            .ok_or(RenderError::Readback)?;
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let s = opts.scale.max(0.1);
        canvas.clear(theme.background);

        let surface_rect = RectI32::from_ltrb(0, 0, opts.width.max(1), opts.height.max(1));
        let plot = surface_rect.inset_scaled(&opts.insets, s);

        let xs = LinearScale::new(
            self.x_axis.min,
            self.x_axis.max,
            plot.left as f32,
            plot.right as f32,
        );
        let ys = LinearScale::new(
            self.y_axis.min,
            self.y_axis.max,
            plot.bottom as f32,
            plot.top as f32,
        );
        let x_ticks = grid::ticks(self.x_axis.min, self.x_axis.max, 8);
        let y_ticks = grid::ticks(self.y_axis.min, self.y_axis.max, 6);

        draw_grid(canvas, &plot, &x_ticks, &y_ticks, &xs, &ys, theme, s);
        draw_frame(canvas, &plot, &x_ticks, &y_ticks, &xs, &ys, theme, s);

        // Colors resolved once so legend rows match the drawn lines.
        let colors: Vec<skia::Color> = self
            .series
            .iter()
            .enumerate()
            .map(|(i, sr)| sr.color.unwrap_or(theme.palette[i % theme.palette.len()]))
            .collect();

        for (series, &color) in self.series.iter().zip(&colors) {
            draw_line_series(canvas, &xs, &ys, series, color, s);
        }

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_tick_labels(canvas, &shaper, &plot, &x_ticks, &y_ticks, &xs, &ys, theme, s);
            draw_axis_labels(canvas, &shaper, &plot, &self.x_axis, &self.y_axis, theme, s);
            if let Some(title) = &self.title {
                draw_title(canvas, &shaper, &plot, title, theme, s);
            }
            draw_legend(canvas, &shaper, &plot, &self.series, &colors, theme, s);
        }
    }
}

// ---- drawing helpers --------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color);
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_ticks: &[f64],
    y_ticks: &[f64],
    xs: &LinearScale,
    ys: &LinearScale,
    theme: &Theme,
    s: f32,
) {
    let paint = stroke_paint(theme.grid, 1.0 * s);
    for &t in x_ticks {
        let x = xs.to_px(t);
        canvas.draw_line((x, plot.top as f32), (x, plot.bottom as f32), &paint);
    }
    for &t in y_ticks {
        let y = ys.to_px(t);
        canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &paint);
    }
}

fn draw_frame(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_ticks: &[f64],
    y_ticks: &[f64],
    xs: &LinearScale,
    ys: &LinearScale,
    theme: &Theme,
    s: f32,
) {
    let paint = stroke_paint(theme.axis_line, 1.5 * s);
    let rect = skia::Rect::from_ltrb(
        plot.left as f32,
        plot.top as f32,
        plot.right as f32,
        plot.bottom as f32,
    );
    canvas.draw_rect(rect, &paint);

    // Short outward tick marks on the bottom and left edges.
    let tick_len = 4.0 * s;
    for &t in x_ticks {
        let x = xs.to_px(t);
        canvas.draw_line((x, plot.bottom as f32), (x, plot.bottom as f32 + tick_len), &paint);
    }
    for &t in y_ticks {
        let y = ys.to_px(t);
        canvas.draw_line((plot.left as f32 - tick_len, y), (plot.left as f32, y), &paint);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    xs: &LinearScale,
    ys: &LinearScale,
    series: &Series,
    color: skia::Color,
    s: f32,
) {
    let pts: Vec<skia::Point> = series
        .data_xy
        .iter()
        .map(|&(x, y)| skia::Point::new(xs.to_px(x), ys.to_px(y)))
        .collect();

    if pts.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to(pts[0]);
        for p in &pts[1..] {
            path.line_to(*p);
        }
        let stroke = stroke_paint(color, 2.0 * s);
        canvas.draw_path(&path, &stroke);
    }

    // A single point still gets its marker even though no line is drawn.
    if let Some(marker) = series.marker {
        let fill = fill_paint(color);
        let radius = 4.0 * s;
        for p in &pts {
            draw_marker(canvas, *p, marker, radius, &fill);
        }
    }
}

fn draw_marker(canvas: &skia::Canvas, p: skia::Point, marker: Marker, r: f32, paint: &skia::Paint) {
    match marker {
        Marker::Circle => {
            canvas.draw_circle(p, r, paint);
        }
        Marker::Square => {
            let rect = skia::Rect::from_xywh(p.x - r, p.y - r, r * 2.0, r * 2.0);
            canvas.draw_rect(rect, paint);
        }
        Marker::TriangleUp => {
            let mut path = skia::Path::new();
            path.move_to((p.x, p.y - r));
            path.line_to((p.x - r, p.y + r));
            path.line_to((p.x + r, p.y + r));
            path.close();
            canvas.draw_path(&path, paint);
        }
        Marker::Diamond => {
            let mut path = skia::Path::new();
            path.move_to((p.x, p.y - r));
            path.line_to((p.x + r, p.y));
            path.line_to((p.x, p.y + r));
            path.line_to((p.x - r, p.y));
            path.close();
            canvas.draw_path(&path, paint);
        }
    }
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    x_ticks: &[f64],
    y_ticks: &[f64],
    xs: &LinearScale,
    ys: &LinearScale,
    theme: &Theme,
    s: f32,
) {
    let size = TICK_SIZE * s;
    let x_step = grid::nice_step(xs.from_px(plot.right as f32) - xs.from_px(plot.left as f32), 8);
    for &t in x_ticks {
        let label = grid::format_tick(t, x_step);
        let x = xs.to_px(t);
        shaper.draw_center(canvas, &label, x, plot.bottom as f32 + 18.0 * s, size, theme.tick_label, true);
    }
    let y_step = grid::nice_step(ys.from_px(plot.top as f32) - ys.from_px(plot.bottom as f32), 6);
    for &t in y_ticks {
        let label = grid::format_tick(t, y_step);
        let y = ys.to_px(t);
        shaper.draw_right(canvas, &label, plot.left as f32 - 8.0 * s, y + size * 0.35, size, theme.tick_label, true);
    }
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
    s: f32,
) {
    let size = LABEL_SIZE * s;
    if !x_axis.label.is_empty() {
        shaper.draw_center(
            canvas,
            &x_axis.label,
            plot.center_x() as f32,
            plot.bottom as f32 + 42.0 * s,
            size,
            theme.axis_label,
            false,
        );
    }
    if !y_axis.label.is_empty() {
        // Rotated 90 degrees counter-clockwise along the left edge.
        let cx = plot.left as f32 - 56.0 * s;
        let cy = plot.center_y() as f32;
        canvas.save();
        canvas.rotate(-90.0, Some(skia::Point::new(cx, cy)));
        shaper.draw_center(canvas, &y_axis.label, cx, cy, size, theme.axis_label, false);
        canvas.restore();
    }
}

fn draw_title(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    title: &str,
    theme: &Theme,
    s: f32,
) {
    shaper.draw_center(
        canvas,
        title,
        plot.center_x() as f32,
        plot.top as f32 - 14.0 * s,
        TITLE_SIZE * s,
        theme.title,
        false,
    );
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    series: &[Series],
    colors: &[skia::Color],
    theme: &Theme,
    s: f32,
) {
    let named: Vec<(usize, &Series)> = series
        .iter()
        .enumerate()
        .filter(|(_, sr)| !sr.name.is_empty())
        .collect();
    if named.is_empty() {
        return;
    }

    let font = LEGEND_SIZE * s;
    let pad = 8.0 * s;
    let sample_w = 26.0 * s;
    let gap = 6.0 * s;
    let row_h = font * 1.7;
    let text_w = named
        .iter()
        .map(|(_, sr)| shaper.measure_width(&sr.name, font, false))
        .fold(0.0f32, f32::max);
    let w = pad + sample_w + gap + text_w + pad;
    let h = pad * 2.0 + row_h * named.len() as f32;
    let x0 = plot.left as f32 + 10.0 * s;
    let y0 = plot.top as f32 + 10.0 * s;
    let rect = skia::Rect::from_xywh(x0, y0, w, h);

    let radius = 4.0 * s;
    canvas.draw_round_rect(rect, radius, radius, &fill_paint(theme.legend_bg));
    canvas.draw_round_rect(rect, radius, radius, &stroke_paint(theme.legend_border, 1.0 * s));

    for (row, &(i, sr)) in named.iter().enumerate() {
        let cy = y0 + pad + row_h * (row as f32 + 0.5);
        let color = colors[i];
        let stroke = stroke_paint(color, 2.0 * s);
        canvas.draw_line((x0 + pad, cy), (x0 + pad + sample_w, cy), &stroke);
        if let Some(marker) = sr.marker {
            let center = skia::Point::new(x0 + pad + sample_w * 0.5, cy);
            draw_marker(canvas, center, marker, 4.0 * s, &fill_paint(color));
        }
        shaper.draw_left(
            canvas,
            &sr.name,
            x0 + pad + sample_w + gap,
            cy + font * 0.35,
            font,
            theme.axis_label,
            false,
        );
    }
}
