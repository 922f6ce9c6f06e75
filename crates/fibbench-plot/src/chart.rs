//! Line charts rendered to SVG.
//!
//! Gaps in a line (placeholder cells, or non-positive values on a log
//! axis) split it into separate segments rather than being interpolated
//! across.

use std::ops::Range;
use std::path::Path;

use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::cartesian::Cartesian2d;
use plotters::prelude::*;

use crate::error::PlotError;

/// Output canvas size in pixels.
pub const CHART_SIZE: (u32, u32) = (800, 500);

pub const ITERATIVE_COLOR: RGBColor = RGBColor(31, 119, 180);
pub const DP_COLOR: RGBColor = RGBColor(255, 127, 14);
pub const RECURSIVE_COLOR: RGBColor = RGBColor(214, 39, 40);
pub const SPEEDUP_COLOR: RGBColor = RGBColor(148, 103, 189);
const REFERENCE_COLOR: RGBColor = RGBColor(127, 127, 127);

/// Y axis scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    /// Logarithmic axis; non-positive values are gaps.
    Log10,
}

impl Scale {
    fn plottable(self, y: f64) -> bool {
        match self {
            Self::Linear => y.is_finite(),
            Self::Log10 => y.is_finite() && y > 0.0,
        }
    }
}

/// Point marker drawn on each sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Cross,
    Triangle,
}

/// One labelled line; `y` may contain NaN gaps.
#[derive(Debug, Clone)]
pub struct Line {
    pub label: String,
    pub color: RGBColor,
    pub marker: Marker,
    pub points: Vec<(f64, f64)>,
}

impl Line {
    #[must_use]
    pub fn new(label: impl Into<String>, color: RGBColor, marker: Marker, x: &[f64], y: &[f64]) -> Self {
        Self {
            label: label.into(),
            color,
            marker,
            points: x.iter().copied().zip(y.iter().copied()).collect(),
        }
    }

    /// Maximal runs of points plottable on `scale`.
    #[must_use]
    pub fn segments(&self, scale: Scale) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for &(x, y) in &self.points {
            if x.is_finite() && scale.plottable(y) {
                current.push((x, y));
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

#[derive(Debug, Clone)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub scale: Scale,
    pub lines: Vec<Line>,
    /// Horizontal dashed reference at this y value.
    pub reference: Option<f64>,
}

impl LineChart {
    #[must_use]
    pub fn new(title: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: "N".to_string(),
            y_label: y_label.into(),
            scale: Scale::Linear,
            lines: Vec::new(),
            reference: None,
        }
    }

    #[must_use]
    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn reference(mut self, y: f64) -> Self {
        self.reference = Some(y);
        self
    }

    /// Axis ranges covering every plottable point and the reference line.
    #[must_use]
    pub fn bounds(&self) -> (Range<f64>, Range<f64>) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        let reference = self.reference.filter(|&y| self.scale.plottable(y));
        for (x, y) in self
            .lines
            .iter()
            .flat_map(|line| line.segments(self.scale))
            .flatten()
        {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if let Some(y) = reference {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        let x = padded(x_min, x_max);
        let y = match self.scale {
            Scale::Linear => {
                if y_min > y_max {
                    0.0..1.0
                } else {
                    let lo = y_min.min(0.0);
                    let hi = if y_max > lo { y_max + (y_max - lo) * 0.05 } else { lo + 1.0 };
                    lo..hi
                }
            }
            Scale::Log10 => {
                if y_min > y_max {
                    1.0..10.0
                } else {
                    let lo = y_min.log10().floor();
                    let hi = y_max.log10().ceil();
                    let hi = if hi > lo { hi } else { lo + 1.0 };
                    decade(lo)..decade(hi)
                }
            }
        };
        (x, y)
    }
}

fn padded(min: f64, max: f64) -> Range<f64> {
    if min > max {
        0.0..1.0
    } else if min == max {
        (min - 1.0)..(max + 1.0)
    } else {
        min..max
    }
}

#[allow(clippy::cast_possible_truncation)]
fn decade(exponent: f64) -> f64 {
    10f64.powi(exponent as i32)
}

fn render_error<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Render(e.to_string())
}

/// Draw `chart` into an SVG file at `path`.
pub fn render_svg(chart: &LineChart, path: &Path) -> Result<(), PlotError> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let (x_range, y_range) = chart.bounds();
    let mut builder = ChartBuilder::on(&root);
    builder
        .caption(&chart.title, ("sans-serif", 22).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(80);

    let x_format = |v: &f64| format!("{v:.0}");
    match chart.scale {
        Scale::Linear => {
            let mut ctx = builder
                .build_cartesian_2d(x_range.clone(), y_range)
                .map_err(render_error)?;
            ctx.configure_mesh()
                .x_desc(chart.x_label.as_str())
                .y_desc(chart.y_label.as_str())
                .x_label_formatter(&x_format)
                .y_label_formatter(&|v: &f64| format!("{v:.3e}"))
                .draw()
                .map_err(render_error)?;
            draw_lines(&mut ctx, chart, &x_range)?;
        }
        Scale::Log10 => {
            let mut ctx = builder
                .build_cartesian_2d(x_range.clone(), y_range.log_scale())
                .map_err(render_error)?;
            ctx.configure_mesh()
                .x_desc(chart.x_label.as_str())
                .y_desc(chart.y_label.as_str())
                .x_label_formatter(&x_format)
                .y_label_formatter(&|v: &f64| format!("{v:.0e}"))
                .draw()
                .map_err(render_error)?;
            draw_lines(&mut ctx, chart, &x_range)?;
        }
    }

    root.present().map_err(render_error)?;
    tracing::debug!(path = %path.display(), title = %chart.title, "chart rendered");
    Ok(())
}

/// Reference line, line segments with markers, and the legend.
fn draw_lines<'a, DB, Y>(
    ctx: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, Y>>,
    chart: &LineChart,
    x_range: &Range<f64>,
) -> Result<(), PlotError>
where
    DB: DrawingBackend + 'a,
    Y: Ranged<ValueType = f64>,
{
    if let Some(y) = chart.reference.filter(|&y| chart.scale.plottable(y)) {
        ctx.draw_series(DashedLineSeries::new(
            [(x_range.start, y), (x_range.end, y)],
            6,
            4,
            REFERENCE_COLOR.stroke_width(1),
        ))
        .map_err(render_error)?;
    }

    for line in &chart.lines {
        let color = line.color;
        let mut labelled = false;
        for segment in line.segments(chart.scale) {
            let anno = ctx
                .draw_series(LineSeries::new(segment.iter().copied(), color.stroke_width(2)))
                .map_err(render_error)?;
            if !labelled {
                anno.label(line.label.as_str()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
                labelled = true;
            }

            let drawn = match line.marker {
                Marker::Circle => ctx.draw_series(
                    segment.iter().map(|&p| Circle::new(p, 3, color.filled())),
                ),
                Marker::Cross => ctx.draw_series(
                    segment.iter().map(|&p| Cross::new(p, 4, color.stroke_width(2))),
                ),
                Marker::Triangle => ctx.draw_series(
                    segment.iter().map(|&p| TriangleMarker::new(p, 4, color.filled())),
                ),
            };
            drawn.map_err(render_error)?;
        }
    }

    ctx.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(render_error)?;
    Ok(())
}
