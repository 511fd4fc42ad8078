//! Plotting context and the macroecological plot helpers.
//!
//! Purpose
//! - `Figure` is a retained, caller-owned scene: axis scales, limits, labels
//!   and an ordered list of layers. Plot helpers append to it; nothing is
//!   rasterized until the caller renders.
//! - Rendering goes through plotters, either into an in-memory SVG string or
//!   onto any drawing area the caller owns (creation and flushing stay with
//!   the caller).
//!
//! Conventions
//! - Layers draw in insertion order, later layers on top.
//! - Auto limits pad the data box by 5 % on linear axes and by a factor of
//!   1.25 on log axes; explicit limits always win.

mod density;
mod rad;
mod sar;
pub mod style;

pub use density::{color_by_pt_dens_plot, plot_color_by_pt_dens, plot_confidence_hull};
pub use rad::{multiple_rads_plot, plot_multiple_rads, plot_rad, rad_plot};
pub use sar::{plot_sars, sars_plot};
pub use style::{FillStyle, LineStyle, Marker};

use plotters::backend::{DrawingBackend, SVGBackend};
use plotters::chart::{ChartBuilder, ChartContext};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::{AsRangedCoord, Ranged, ValueFormatter};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind, IntoDrawingArea};
use plotters::element::{Circle, Cross, Polygon};
use plotters::prelude::IntoLogRange;
use plotters::series::{DashedLineSeries, LineSeries};
use plotters::style::colors::WHITE;
use plotters::style::{Color, RGBColor, ShapeStyle};
use thiserror::Error;

use crate::cfg::{LINEAR_PAD_FLAT, LINEAR_PAD_FRAC, LOG_PAD_FACTOR};
use crate::density::Scale;
use crate::error::AnalysisError;

const MARKER_SIZE: u32 = 4;
const SCATTER_SIZE: u32 = 3;
const LINE_WIDTH: u32 = 2;
const DASH_SIZE: u32 = 8;
const DASH_SPACING: u32 = 5;

/// Errors surfaced while building or rendering a figure.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error("invalid axis limits: {reason}")]
    InvalidLimits { reason: String },
    #[error("rendering failed: {0}")]
    Render(String),
}

fn render_err<E>(err: DrawingAreaErrorKind<E>) -> PlotError
where
    E: std::error::Error + Send + Sync,
{
    PlotError::Render(err.to_string())
}

/// One drawable element of a figure.
#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    /// Connected series with optional markers.
    Line {
        points: Vec<(f64, f64)>,
        style: LineStyle,
    },
    /// Unconnected points, one color per point.
    Scatter {
        points: Vec<(f64, f64)>,
        colors: Vec<RGBColor>,
    },
    /// Closed polygon filled with a translucent color.
    Fill {
        polygon: Vec<(f64, f64)>,
        style: FillStyle,
    },
}

impl Layer {
    fn points(&self) -> &[(f64, f64)] {
        match self {
            Layer::Line { points, .. } | Layer::Scatter { points, .. } => points,
            Layer::Fill { polygon, .. } => polygon,
        }
    }
}

/// Caller-owned plotting context.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub width: u32,
    pub height: u32,
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub x_scale: Scale,
    pub y_scale: Scale,
    pub x_limits: Option<(f64, f64)>,
    pub y_limits: Option<(f64, f64)>,
    layers: Vec<Layer>,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: None,
            x_label: String::new(),
            y_label: String::new(),
            x_scale: Scale::Linear,
            y_scale: Scale::Linear,
            x_limits: None,
            y_limits: None,
            layers: Vec::new(),
        }
    }
}

impl Figure {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn set_labels(&mut self, x: impl Into<String>, y: impl Into<String>) {
        self.x_label = x.into();
        self.y_label = y.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    #[inline]
    pub fn set_loglog(&mut self) {
        self.x_scale = Scale::Log;
        self.y_scale = Scale::Log;
    }

    pub fn set_xlim(&mut self, lo: f64, hi: f64) {
        self.x_limits = Some((lo, hi));
    }

    pub fn set_ylim(&mut self, lo: f64, hi: f64) {
        self.y_limits = Some((lo, hi));
    }

    pub fn line(&mut self, points: Vec<(f64, f64)>, style: LineStyle) {
        self.layers.push(Layer::Line { points, style });
    }

    /// Append a scatter layer; `colors` must pair up with `points`.
    pub fn scatter(&mut self, points: Vec<(f64, f64)>, colors: Vec<RGBColor>) {
        debug_assert_eq!(points.len(), colors.len());
        self.layers.push(Layer::Scatter { points, colors });
    }

    pub fn fill(&mut self, polygon: Vec<(f64, f64)>, style: FillStyle) {
        self.layers.push(Layer::Fill { polygon, style });
    }

    /// Bounding box `((xmin, xmax), (ymin, ymax))` of every layer point.
    pub fn data_bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut pts = self.layers.iter().flat_map(|l| l.points().iter());
        let &(x0, y0) = pts.next()?;
        let init = ((x0, x0), (y0, y0));
        Some(pts.fold(init, |((xa, xb), (ya, yb)), &(x, y)| {
            ((xa.min(x), xb.max(x)), (ya.min(y), yb.max(y)))
        }))
    }

    /// Axis limits used for rendering: explicit ones, else padded data bounds.
    pub fn limits(&self) -> Result<((f64, f64), (f64, f64)), PlotError> {
        let bounds = self.data_bounds();
        let x = resolve_axis("x", self.x_limits, bounds.map(|b| b.0), self.x_scale)?;
        let y = resolve_axis("y", self.y_limits, bounds.map(|b| b.1), self.y_scale)?;
        Ok((x, y))
    }

    /// Render into an SVG document held in memory.
    pub fn render_svg(&self) -> Result<String, PlotError> {
        let mut buf = String::new();
        {
            let root = SVGBackend::with_string(&mut buf, (self.width, self.height))
                .into_drawing_area();
            root.fill(&WHITE).map_err(render_err)?;
            self.draw_on(&root)?;
            root.present().map_err(render_err)?;
        }
        Ok(buf)
    }

    /// Draw onto a caller-owned drawing area (any plotters backend).
    pub fn draw_on<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
    ) -> Result<(), PlotError> {
        let ((x0, x1), (y0, y1)) = self.limits()?;
        tracing::trace!(layers = self.layers.len(), x0, x1, y0, y1, "draw figure");
        match (self.x_scale, self.y_scale) {
            (Scale::Linear, Scale::Linear) => self.draw_chart(area, x0..x1, y0..y1),
            (Scale::Log, Scale::Linear) => self.draw_chart(area, (x0..x1).log_scale(), y0..y1),
            (Scale::Linear, Scale::Log) => self.draw_chart(area, x0..x1, (y0..y1).log_scale()),
            (Scale::Log, Scale::Log) => {
                self.draw_chart(area, (x0..x1).log_scale(), (y0..y1).log_scale())
            }
        }
    }

    fn draw_chart<DB, XS, YS>(
        &self,
        area: &DrawingArea<DB, Shift>,
        x_spec: XS,
        y_spec: YS,
    ) -> Result<(), PlotError>
    where
        DB: DrawingBackend,
        XS: AsRangedCoord<Value = f64>,
        YS: AsRangedCoord<Value = f64>,
        XS::CoordDescType: ValueFormatter<f64>,
        YS::CoordDescType: ValueFormatter<f64>,
    {
        let mut builder = ChartBuilder::on(area);
        builder.margin(10).x_label_area_size(40).y_label_area_size(60);
        if let Some(title) = &self.title {
            builder.caption(title, ("sans-serif", 20));
        }
        let mut chart = builder
            .build_cartesian_2d(x_spec, y_spec)
            .map_err(render_err)?;
        chart
            .configure_mesh()
            .x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .draw()
            .map_err(render_err)?;
        for layer in &self.layers {
            draw_layer(&mut chart, layer)?;
        }
        Ok(())
    }
}

fn draw_layer<DB, X, Y>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<X, Y>>,
    layer: &Layer,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    X: Ranged<ValueType = f64>,
    Y: Ranged<ValueType = f64>,
{
    match layer {
        Layer::Line { points, style } => {
            let stroke = ShapeStyle::from(&style.color).stroke_width(LINE_WIDTH);
            if style.dashed {
                chart
                    .draw_series(DashedLineSeries::new(
                        points.clone(),
                        DASH_SIZE,
                        DASH_SPACING,
                        stroke,
                    ))
                    .map_err(render_err)?;
            } else {
                chart
                    .draw_series(LineSeries::new(points.iter().copied(), stroke))
                    .map_err(render_err)?;
            }
            let marker = ShapeStyle::from(&style.color).stroke_width(1);
            match style.marker {
                Marker::None => {}
                Marker::Circle => {
                    chart
                        .draw_series(
                            points
                                .iter()
                                .map(|&p| Circle::new(p, MARKER_SIZE, marker.filled())),
                        )
                        .map_err(render_err)?;
                }
                Marker::Cross => {
                    chart
                        .draw_series(points.iter().map(|&p| Cross::new(p, MARKER_SIZE, marker)))
                        .map_err(render_err)?;
                }
            }
        }
        Layer::Scatter { points, colors } => {
            chart
                .draw_series(
                    points
                        .iter()
                        .zip(colors)
                        .map(|(&p, c)| Circle::new(p, SCATTER_SIZE, c.filled())),
                )
                .map_err(render_err)?;
        }
        Layer::Fill { polygon, style } => {
            let fill = style.color.mix(style.alpha.clamp(0.0, 1.0)).filled();
            chart
                .draw_series(std::iter::once(Polygon::new(polygon.clone(), fill)))
                .map_err(render_err)?;
        }
    }
    Ok(())
}

fn resolve_axis(
    axis: &str,
    explicit: Option<(f64, f64)>,
    data: Option<(f64, f64)>,
    scale: Scale,
) -> Result<(f64, f64), PlotError> {
    let (lo, hi) = match (explicit, data) {
        (Some(lim), _) => lim,
        (None, Some((lo, hi))) => pad(lo, hi, scale),
        (None, None) => match scale {
            Scale::Linear => (0.0, 1.0),
            Scale::Log => (1.0, 10.0),
        },
    };
    if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
        return Err(PlotError::InvalidLimits {
            reason: format!("{axis} range {lo}..{hi} is empty or not finite"),
        });
    }
    if scale.is_log() && lo <= 0.0 {
        return Err(PlotError::InvalidLimits {
            reason: format!("{axis} axis is logarithmic but its range starts at {lo}"),
        });
    }
    Ok((lo, hi))
}

fn pad(lo: f64, hi: f64, scale: Scale) -> (f64, f64) {
    match scale {
        Scale::Log => (lo / LOG_PAD_FACTOR, hi * LOG_PAD_FACTOR),
        Scale::Linear => {
            let span = hi - lo;
            if span <= 0.0 {
                (lo - LINEAR_PAD_FLAT, hi + LINEAR_PAD_FLAT)
            } else {
                (lo - span * LINEAR_PAD_FRAC, hi + span * LINEAR_PAD_FRAC)
            }
        }
    }
}

/// Check a series that will be drawn on a log axis.
pub(crate) fn check_positive(name: &str, values: &[f64]) -> Result<(), AnalysisError> {
    if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v <= 0.0) {
        return Err(AnalysisError::invalid(format!(
            "{name} is drawn on a log axis and must be > 0, got {bad}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::style::colors::BLUE;

    #[test]
    fn auto_limits_pad_linear_and_log() {
        let mut fig = Figure::default();
        fig.line(vec![(0.0, 10.0), (10.0, 20.0)], LineStyle::solid(BLUE));
        let ((x0, x1), (y0, y1)) = fig.limits().unwrap();
        assert!((x0 + 0.5).abs() < 1e-12 && (x1 - 10.5).abs() < 1e-12);
        assert!((y0 - 9.5).abs() < 1e-12 && (y1 - 20.5).abs() < 1e-12);

        // x starts at 0, which a log axis cannot show
        fig.set_loglog();
        assert!(matches!(
            fig.limits(),
            Err(PlotError::InvalidLimits { .. })
        ));
    }

    #[test]
    fn explicit_limits_win_and_flat_data_is_padded() {
        let mut fig = Figure::default();
        fig.line(vec![(2.0, 3.0), (2.0, 3.0)], LineStyle::solid(BLUE));
        let ((x0, x1), _) = fig.limits().unwrap();
        assert_eq!((x0, x1), (1.5, 2.5));
        fig.set_xlim(-1.0, 1.0);
        assert_eq!(fig.limits().unwrap().0, (-1.0, 1.0));
        fig.set_ylim(5.0, 5.0);
        assert!(matches!(
            fig.limits(),
            Err(PlotError::InvalidLimits { .. })
        ));
    }

    #[test]
    fn log_limits_scale_by_factor() {
        let mut fig = Figure::default();
        fig.set_loglog();
        fig.line(vec![(1.0, 10.0), (100.0, 1000.0)], LineStyle::solid(BLUE));
        let ((x0, x1), (y0, y1)) = fig.limits().unwrap();
        assert!((x0 - 0.8).abs() < 1e-12 && (x1 - 125.0).abs() < 1e-12);
        assert!((y0 - 8.0).abs() < 1e-12 && (y1 - 1250.0).abs() < 1e-12);
    }

    #[test]
    fn empty_figure_renders() {
        let fig = Figure::new(320, 240);
        let svg = fig.render_svg().unwrap();
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn all_layer_kinds_render_to_svg() {
        let mut fig = Figure::default();
        fig.set_labels("X", "Y");
        fig.set_title("layers");
        fig.line(
            vec![(1.0, 1.0), (2.0, 3.0), (3.0, 2.0)],
            LineStyle::new(BLUE, Marker::Cross, true),
        );
        fig.scatter(vec![(1.5, 1.5)], vec![RGBColor(10, 20, 30)]);
        fig.fill(
            vec![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)],
            FillStyle::default(),
        );
        let svg = fig.render_svg().unwrap();
        assert!(svg.contains("<polygon") || svg.contains("<path"));
        assert!(svg.contains("<circle"));
        assert_eq!(fig.layers().len(), 3);
    }

    #[test]
    fn data_bounds_cover_every_layer() {
        let mut fig = Figure::default();
        assert!(fig.data_bounds().is_none());
        fig.line(vec![(0.0, 5.0)], LineStyle::solid(BLUE));
        fig.fill(vec![(-2.0, 1.0), (3.0, 7.0)], FillStyle::default());
        assert_eq!(fig.data_bounds(), Some(((-2.0, 3.0), (1.0, 7.0))));
    }
}
