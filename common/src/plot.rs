//! Renderer-independent figure description
//!
//! A [`Figure`] is what a simulation hands over for display: a title, axis
//! labels, labelled line series, reference lines and optional fixed limits.
//! The GPU line renderer and the egui chrome both read it, so neither needs to
//! know which simulation produced it.

/// Line colours cycled through for successive series.
pub const SERIES_PALETTE: [[f32; 4]; 6] = [
    [0.12, 0.47, 0.71, 1.0],
    [1.00, 0.50, 0.05, 1.0],
    [0.17, 0.63, 0.17, 1.0],
    [0.84, 0.15, 0.16, 1.0],
    [0.58, 0.40, 0.74, 1.0],
    [0.55, 0.34, 0.29, 1.0],
];

/// Fraction of the data span added on each side of autoscaled limits.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

/// Upper bound on the number of ticks per axis.
pub const MAX_TICKS: usize = 8;

/// A labelled polyline in data coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<[f64; 2]>,
    pub color: [f32; 4],
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<[f64; 2]>, color: [f32; 4]) -> Self {
        Self {
            label: label.into(),
            points,
            color,
        }
    }

    /// Finite points only; the renderer and autoscaling skip the rest.
    pub fn finite_points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.points
            .iter()
            .copied()
            .filter(|p| p[0].is_finite() && p[1].is_finite())
    }
}

/// Full-span horizontal or vertical line, drawn under the series
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceLine {
    Horizontal(f64),
    Vertical(f64),
}

/// One plot: axes, series and decorations
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub reference_lines: Vec<ReferenceLine>,
    pub x_limits: Option<(f64, f64)>,
    pub y_limits: Option<(f64, f64)>,
    pub show_legend: bool,
    pub show_grid: bool,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            series: Vec::new(),
            reference_lines: Vec::new(),
            x_limits: None,
            y_limits: None,
            show_legend: false,
            show_grid: false,
        }
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Add a series coloured with the next palette entry.
    pub fn plot(mut self, label: impl Into<String>, points: Vec<[f64; 2]>) -> Self {
        let color = SERIES_PALETTE[self.series.len() % SERIES_PALETTE.len()];
        self.series.push(Series::new(label, points, color));
        self
    }

    pub fn axhline(mut self, y: f64) -> Self {
        self.reference_lines.push(ReferenceLine::Horizontal(y));
        self
    }

    pub fn axvline(mut self, x: f64) -> Self {
        self.reference_lines.push(ReferenceLine::Vertical(x));
        self
    }

    pub fn xlim(mut self, lo: f64, hi: f64) -> Self {
        self.x_limits = Some((lo, hi));
        self
    }

    pub fn ylim(mut self, lo: f64, hi: f64) -> Self {
        self.y_limits = Some((lo, hi));
        self
    }

    pub fn legend(mut self) -> Self {
        self.show_legend = true;
        self
    }

    pub fn grid(mut self) -> Self {
        self.show_grid = true;
        self
    }

    /// Resolve the visible data rectangle.
    ///
    /// Explicit limits win; otherwise the finite data extent is padded by
    /// [`AUTOSCALE_MARGIN`] on each side.
    pub fn bounds(&self) -> PlotBounds {
        let points = || self.series.iter().flat_map(Series::finite_points);
        let x = self
            .x_limits
            .or_else(|| extent(points().map(|p| p[0])).map(pad))
            .unwrap_or((0.0, 1.0));
        let y = self
            .y_limits
            .or_else(|| extent(points().map(|p| p[1])).map(pad))
            .unwrap_or((0.0, 1.0));
        PlotBounds::new(x, y)
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn pad((lo, hi): (f64, f64)) -> (f64, f64) {
    let margin = (hi - lo) * AUTOSCALE_MARGIN;
    (lo - margin, hi + margin)
}

/// Visible data rectangle, always finite with a positive span on both axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotBounds {
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        let (x_min, x_max) = sanitize_range(x);
        let (y_min, y_max) = sanitize_range(y);
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Map a data point into the unit square (0,0 bottom-left).
    pub fn normalize(&self, x: f64, y: f64) -> [f64; 2] {
        [(x - self.x_min) / self.width(), (y - self.y_min) / self.height()]
    }

    pub fn contains_x(&self, x: f64) -> bool {
        (self.x_min..=self.x_max).contains(&x)
    }

    pub fn contains_y(&self, y: f64) -> bool {
        (self.y_min..=self.y_max).contains(&y)
    }

    pub fn x_ticks(&self) -> Vec<f64> {
        nice_ticks(self.x_min, self.x_max, MAX_TICKS)
    }

    pub fn y_ticks(&self) -> Vec<f64> {
        nice_ticks(self.y_min, self.y_max, MAX_TICKS)
    }

    pub fn x_tick_step(&self) -> f64 {
        nice_step(self.width() / MAX_TICKS as f64)
    }

    pub fn y_tick_step(&self) -> f64 {
        nice_step(self.height() / MAX_TICKS as f64)
    }
}

/// Order a range, replace non-finite limits and widen zero-width spans.
fn sanitize_range((lo, hi): (f64, f64)) -> (f64, f64) {
    if !lo.is_finite() || !hi.is_finite() {
        log::warn!("non-finite axis limits ({lo}, {hi}); falling back to (0, 1)");
        return (0.0, 1.0);
    }
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let scale = lo.abs().max(hi.abs());
    if hi - lo > scale * 1e-12 {
        return (lo, hi);
    }
    let half = if scale > 0.0 { 0.05 * scale } else { 0.5 };
    let mid = 0.5 * (lo + hi);
    log::debug!("degenerate axis range at {mid}; widening by {half}");
    (mid - half, mid + half)
}

/// Smallest 1, 2 or 5 times a power of ten that is at least `raw`.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw > 0.0) || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick positions at multiples of a nice step inside `[lo, hi]`.
pub fn nice_ticks(lo: f64, hi: f64, max_ticks: usize) -> Vec<f64> {
    let span = hi - lo;
    if max_ticks == 0 || !(span > 0.0) || !span.is_finite() {
        return Vec::new();
    }
    let step = nice_step(span / max_ticks as f64);
    let tolerance = step * 1e-9;
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last)
        .map(|i| i as f64 * step + 0.0)
        .filter(|v| *v >= lo - tolerance && *v <= hi + tolerance)
        .collect()
}

/// Tick label text: fixed notation sized to the step, scientific for extreme magnitudes.
pub fn format_tick(value: f64, step: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().max(step.abs());
    if !(1e-3..1e4).contains(&magnitude) {
        return format!("{value:.1e}");
    }
    let decimals = (-step.log10().floor()).max(0.0) as usize;
    format!("{value:.decimals$}")
}
