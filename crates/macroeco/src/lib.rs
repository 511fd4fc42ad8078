//! Macroecological analysis and plotting helpers.
//!
//! Modules
//! - `rad`: rank-abundance data and predicted RADs.
//! - `density`: neighbor counts within a radius (linear or log space).
//! - `hull`: convex hulls and density-filtered confidence hulls.
//! - `stats`: evenness (Evar) and observed-vs-predicted R².
//! - `plot`: the caller-owned `Figure` plus RAD, SAR, density and hull plots.
//!
//! Every routine is a pure function of its inputs; only `Figure` carries state,
//! and the caller owns it.

pub mod api;
mod cfg;
pub mod density;
pub mod error;
pub mod hull;
pub mod plot;
pub mod rad;
pub mod stats;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::AnalysisError;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::density::{count_pts_within_radius, NeighborCount, Scale};
    pub use crate::error::AnalysisError;
    pub use crate::hull::{confidence_hull, convex_hull, ConfidenceHull, HullCfg};
    pub use crate::plot::{Figure, FillStyle, PlotError};
    pub use crate::rad::{get_rad_data, get_rad_from_cdf, Rad};
    pub use crate::stats::{e_var, obs_pred_rsquare};
    pub use nalgebra::Vector2 as Vec2;
}
