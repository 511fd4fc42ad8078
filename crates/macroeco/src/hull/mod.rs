//! Convex hulls and density-based confidence hulls.
//!
//! - `convex_hull`: Andrew's monotone chain, counter-clockwise, collinear
//!   points dropped, no repeated closing vertex.
//! - `confidence_hull`: hull of the densest unique points whose cumulative
//!   share of the neighbor-count mass stays `<= confidence`.
//!
//! Selection rule
//! - Unique points are stably sorted by neighbor count, descending (ties keep
//!   first-occurrence order). Running sums are kept in integers and divided
//!   by the total once, so a confidence of `1.0` always admits every point.
//! - The point whose share pushes the running total past `confidence` is
//!   excluded, as is everything after it.

use nalgebra::Vector2;
use std::cmp::Ordering;

use crate::cfg::COLLINEAR_EPS;
use crate::density::{count_pts_within_radius, NeighborCount, Scale};
use crate::error::AnalysisError;

/// Confidence-hull configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Target share of the total neighbor-count mass, in `(0, 1]`.
    pub confidence: f64,
    /// Distance model for the neighbor counts.
    pub scale: Scale,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            confidence: 0.95,
            scale: Scale::Linear,
        }
    }
}

impl HullCfg {
    #[inline]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    #[inline]
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }
}

/// Convex polygon around the densest subset of a point set.
///
/// Invariants:
/// - `vertices.len() >= 3`, counter-clockwise, first vertex not repeated.
/// - `selected` is the size of the density-filtered subset the hull wraps.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfidenceHull {
    pub vertices: Vec<Vector2<f64>>,
    pub selected: usize,
}

impl ConfidenceHull {
    /// Vertices with the first one repeated at the end, ready to fill.
    pub fn closed(&self) -> Vec<(f64, f64)> {
        let mut out: Vec<(f64, f64)> = self.vertices.iter().map(|p| (p.x, p.y)).collect();
        if let Some(&first) = out.first() {
            out.push(first);
        }
        out
    }

    /// Shoelace area of the hull polygon.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let twice: f64 = (0..n)
            .map(|k| {
                let p = self.vertices[k];
                let q = self.vertices[(k + 1) % n];
                p.x * q.y - p.y * q.x
            })
            .sum();
        0.5 * twice.abs()
    }

    /// Membership test; boundary points count as inside (within `eps`).
    pub fn contains(&self, p: Vector2<f64>, eps: f64) -> bool {
        let n = self.vertices.len();
        (0..n).all(|k| cross(self.vertices[k], self.vertices[(k + 1) % n], p) >= -eps)
    }
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// `c` lies strictly left of `a -> b`, beyond a tolerance relative to the
/// edge lengths so the test is independent of coordinate scale.
#[inline]
fn turns_left(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    let tol = COLLINEAR_EPS * (b - a).norm() * (c - a).norm();
    cross(a, b, c) > tol
}

fn lex_cmp(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Andrew's monotone chain convex hull (returns hull in CCW order).
///
/// Duplicates and collinear boundary points are dropped. Fewer than two
/// distinct input points give an empty hull; collinear input gives the two
/// extreme points.
pub fn convex_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup_by(|a, b| a == b);
    if pts.len() < 2 {
        return Vec::new();
    }
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2
            && !turns_left(lower[lower.len() - 2], lower[lower.len() - 1], *p)
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2
            && !turns_left(upper[upper.len() - 2], upper[upper.len() - 1], *p)
        {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Densest unique points whose cumulative count share stays `<= confidence`.
///
/// `counts` is taken in the order produced by `count_pts_within_radius`.
pub fn select_dense_points(counts: &[NeighborCount], confidence: f64) -> Vec<NeighborCount> {
    let mut sorted = counts.to_vec();
    // `sort_by` is stable: ties keep first-occurrence order.
    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    let total: usize = sorted.iter().map(|c| c.count).sum();
    if total == 0 {
        return Vec::new();
    }
    let total = total as f64;
    let mut running = 0usize;
    sorted
        .into_iter()
        .take_while(|c| {
            running += c.count;
            running as f64 / total <= confidence
        })
        .collect()
}

/// Convex hull of the densest part of `(x, y)` holding a `confidence` share
/// of the total neighbor-count mass.
///
/// Errors
/// - `InvalidInput`: bad point set or radius (see `count_pts_within_radius`),
///   or a confidence that is not finite and `> 0`.
/// - `Degenerate`: fewer than three points selected, or the selection is
///   collinear.
pub fn confidence_hull(
    x: &[f64],
    y: &[f64],
    radius: f64,
    cfg: HullCfg,
) -> Result<ConfidenceHull, AnalysisError> {
    if !cfg.confidence.is_finite() || cfg.confidence <= 0.0 {
        return Err(AnalysisError::invalid(format!(
            "confidence must be finite and > 0, got {}",
            cfg.confidence
        )));
    }
    let counts = count_pts_within_radius(x, y, radius, cfg.scale)?;
    let selected = select_dense_points(&counts, cfg.confidence);
    if selected.len() < 3 {
        return Err(AnalysisError::degenerate(format!(
            "insufficient points for hull: {} selected at confidence {}",
            selected.len(),
            cfg.confidence
        )));
    }
    let pts: Vec<Vector2<f64>> = selected.iter().map(|c| Vector2::new(c.x, c.y)).collect();
    let vertices = convex_hull(&pts);
    if vertices.len() < 3 {
        return Err(AnalysisError::degenerate(format!(
            "insufficient points for hull: {} selected points are collinear",
            selected.len()
        )));
    }
    tracing::debug!(
        unique = counts.len(),
        selected = selected.len(),
        vertices = vertices.len(),
        confidence = cfg.confidence,
        "confidence hull"
    );
    Ok(ConfidenceHull {
        vertices,
        selected: selected.len(),
    })
}
