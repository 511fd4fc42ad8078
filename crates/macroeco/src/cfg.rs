//! Tolerance defaults (internal).
//!
//! Fixed constants, in the same spirit as the geometry tolerances: callers
//! never tune these, only the public `*Cfg` structs.

/// Relative cross-product threshold (scaled by both edge lengths) below which
/// three hull points count as collinear.
pub(crate) const COLLINEAR_EPS: f64 = 1e-12;
/// Relative padding applied to linear auto-limits.
pub(crate) const LINEAR_PAD_FRAC: f64 = 0.05;
/// Absolute padding used when a linear axis has zero span.
pub(crate) const LINEAR_PAD_FLAT: f64 = 0.5;
/// Multiplicative padding applied to log auto-limits.
pub(crate) const LOG_PAD_FACTOR: f64 = 1.25;
