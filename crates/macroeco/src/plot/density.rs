//! Density-colored scatter plots and confidence-hull overlays.

use super::style::{viridis_colors, FillStyle};
use super::{Figure, PlotError};
use crate::density::{count_pts_within_radius, Scale};
use crate::hull::{confidence_hull, ConfidenceHull, HullCfg};

/// Scatter `(x, y)` colored by `log10` of each point's neighbor count.
///
/// Points are drawn in ascending count order so the densest end up on top.
/// With `loglog`, neighbors are counted in log space, both axes are log
/// scaled and the limits span `0.5·min .. 2·max` of the data.
pub fn plot_color_by_pt_dens(
    fig: &mut Figure,
    x: &[f64],
    y: &[f64],
    radius: f64,
    loglog: bool,
) -> Result<(), PlotError> {
    let mut counts = count_pts_within_radius(x, y, radius, Scale::from_log_flag(loglog))?;
    counts.sort_by_key(|c| c.count);

    let shade: Vec<f64> = counts.iter().map(|c| (c.count as f64).log10()).collect();
    let colors = viridis_colors(&shade);
    let points = counts.iter().map(|c| (c.x, c.y)).collect();
    fig.scatter(points, colors);

    if loglog {
        fig.set_loglog();
        let (xmin, xmax) = min_max(x);
        let (ymin, ymax) = min_max(y);
        fig.set_xlim(xmin * 0.5, xmax * 2.0);
        fig.set_ylim(ymin * 0.5, ymax * 2.0);
    }
    Ok(())
}

/// `plot_color_by_pt_dens` into a fresh default figure.
pub fn color_by_pt_dens_plot(
    x: &[f64],
    y: &[f64],
    radius: f64,
    loglog: bool,
) -> Result<Figure, PlotError> {
    let mut fig = Figure::default();
    plot_color_by_pt_dens(&mut fig, x, y, radius, loglog)?;
    Ok(fig)
}

/// Compute a confidence hull and fill it onto `fig`.
///
/// Log-scale hulls switch both axes to log. Returns the hull (open vertex
/// list) so callers can reuse it.
pub fn plot_confidence_hull(
    fig: &mut Figure,
    x: &[f64],
    y: &[f64],
    radius: f64,
    cfg: HullCfg,
    fill: FillStyle,
) -> Result<ConfidenceHull, PlotError> {
    let hull = confidence_hull(x, y, radius, cfg)?;
    if cfg.scale.is_log() {
        fig.set_loglog();
    }
    fig.fill(hull.closed(), fill);
    Ok(hull)
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
