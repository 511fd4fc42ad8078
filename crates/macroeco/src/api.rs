//! Curated API surface.
//!
//! Flat re-exports of every analysis and plotting entry point, so callers can
//! `use macroeco::api::*` without learning the module layout.

// Numeric routines
pub use crate::density::{count_pts_within_radius, unique_points, NeighborCount, Scale};
pub use crate::error::AnalysisError;
pub use crate::hull::{
    confidence_hull, convex_hull, select_dense_points, ConfidenceHull, HullCfg,
};
pub use crate::rad::{
    get_rad_data, get_rad_from_cdf, rank_midpoints, round_abundances, sorted_descending, Rad,
};
pub use crate::stats::{e_var, obs_pred_rsquare};
// Plotting
pub use crate::plot::style::{hsv_to_rgb, rad_line_style, sar_colors, RAD_LINE_STYLES};
pub use crate::plot::{
    color_by_pt_dens_plot, multiple_rads_plot, plot_color_by_pt_dens, plot_confidence_hull,
    plot_multiple_rads, plot_rad, plot_sars, rad_plot, sars_plot, Figure, FillStyle, Layer,
    LineStyle, Marker, PlotError,
};
