//! Point density by neighbor counting.
//!
//! Purpose
//! - For each unique `(x, y)` observation, count how many observations fall
//!   within a circular neighborhood. Feeds the density-colored scatter and the
//!   confidence hull.
//!
//! Conventions
//! - Unique points are reported in first-occurrence order; `-0.0` and `0.0`
//!   are the same coordinate.
//! - Log mode compares `log10` coordinates against `log10(radius)`, i.e. the
//!   radius is read as a ratio. Note that `radius = 1` gives a zero-width
//!   neighborhood and `radius < 1` behaves like `1 / radius`.
//! - Brute force, O(U·N) for U unique points among N observations.

use std::collections::HashSet;

use crate::error::{check_paired, AnalysisError};

/// Distance model used for neighbor tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scale {
    #[default]
    Linear,
    Log,
}

impl Scale {
    #[inline]
    pub fn from_log_flag(log: bool) -> Self {
        if log {
            Scale::Log
        } else {
            Scale::Linear
        }
    }

    #[inline]
    pub fn is_log(self) -> bool {
        matches!(self, Scale::Log)
    }
}

/// A unique point and the number of observations within the radius of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborCount {
    pub x: f64,
    pub y: f64,
    pub count: usize,
}

#[inline]
fn key(v: f64) -> u64 {
    // Collapse -0.0 onto 0.0 so both hash alike.
    (v + 0.0).to_bits()
}

/// Unique `(x, y)` pairs in first-occurrence order.
pub fn unique_points(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    let mut seen: HashSet<(u64, u64)> = HashSet::with_capacity(x.len());
    let mut out = Vec::new();
    for (&a, &b) in x.iter().zip(y) {
        if seen.insert((key(a), key(b))) {
            out.push((a + 0.0, b + 0.0));
        }
    }
    out
}

fn validate(x: &[f64], y: &[f64], radius: f64, scale: Scale) -> Result<(), AnalysisError> {
    check_paired("x", x, "y", y)?;
    if !radius.is_finite() || radius <= 0.0 {
        return Err(AnalysisError::invalid(format!(
            "radius must be finite and > 0, got {radius}"
        )));
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(AnalysisError::invalid("coordinates must be finite"));
    }
    if scale.is_log() && x.iter().chain(y).any(|v| *v <= 0.0) {
        return Err(AnalysisError::invalid(
            "log-scale neighbor counts need strictly positive coordinates",
        ));
    }
    Ok(())
}

/// Count the observations within `radius` of every unique point.
///
/// - `Scale::Linear`: `(x-a)² + (y-b)² <= radius²`.
/// - `Scale::Log`: `(log10 x - log10 a)² + (log10 y - log10 b)² <= (log10 radius)²`.
pub fn count_pts_within_radius(
    x: &[f64],
    y: &[f64],
    radius: f64,
    scale: Scale,
) -> Result<Vec<NeighborCount>, AnalysisError> {
    validate(x, y, radius, scale)?;
    let unique = unique_points(x, y);

    let counts = match scale {
        Scale::Linear => {
            let r2 = radius * radius;
            unique
                .iter()
                .map(|&(a, b)| NeighborCount {
                    x: a,
                    y: b,
                    count: within(x, y, a, b, r2),
                })
                .collect::<Vec<_>>()
        }
        Scale::Log => {
            let lx: Vec<f64> = x.iter().map(|v| v.log10()).collect();
            let ly: Vec<f64> = y.iter().map(|v| v.log10()).collect();
            let lr = radius.log10();
            let r2 = lr * lr;
            unique
                .iter()
                .map(|&(a, b)| NeighborCount {
                    x: a,
                    y: b,
                    count: within(&lx, &ly, a.log10(), b.log10(), r2),
                })
                .collect::<Vec<_>>()
        }
    };

    tracing::debug!(
        points = x.len(),
        unique = counts.len(),
        radius,
        log = scale.is_log(),
        "counted neighbors"
    );
    Ok(counts)
}

#[inline]
fn within(xs: &[f64], ys: &[f64], a: f64, b: f64, r2: f64) -> usize {
    xs.iter()
        .zip(ys)
        .filter(|&(px, py)| {
            let dx = *px - a;
            let dy = *py - b;
            dx * dx + dy * dy <= r2
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicated_point_collapses_to_one_record() {
        let out = count_pts_within_radius(&[1.0, 1.0, 1.0], &[2.0, 2.0, 2.0], 1.0, Scale::Linear)
            .unwrap();
        assert_eq!(
            out,
            vec![NeighborCount {
                x: 1.0,
                y: 2.0,
                count: 3
            }]
        );
    }

    #[test]
    fn boundary_is_inclusive() {
        // (0,0) and (3,4) are exactly 5 apart.
        let out =
            count_pts_within_radius(&[0.0, 3.0], &[0.0, 4.0], 5.0, Scale::Linear).unwrap();
        assert!(out.iter().all(|c| c.count == 2));
        let out =
            count_pts_within_radius(&[0.0, 3.0], &[0.0, 4.0], 4.999, Scale::Linear).unwrap();
        assert!(out.iter().all(|c| c.count == 1));
    }

    #[test]
    fn first_occurrence_order_and_signed_zero() {
        let x = [2.0, 0.0, 2.0, -0.0, 5.0];
        let y = [1.0, 0.0, 1.0, 0.0, 5.0];
        let u = unique_points(&x, &y);
        assert_eq!(u, vec![(2.0, 1.0), (0.0, 0.0), (5.0, 5.0)]);
        let out = count_pts_within_radius(&x, &y, 0.5, Scale::Linear).unwrap();
        let counts: Vec<usize> = out.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![2, 2, 1]);
    }

    #[test]
    fn log_mode_uses_log10_of_radius() {
        // log10 distances: 1 and 10 differ by 1 decade, 1 and 1000 by 3.
        let x = [1.0, 10.0, 1000.0];
        let y = [1.0, 1.0, 1.0];
        let out = count_pts_within_radius(&x, &y, 10.0, Scale::Log).unwrap();
        let counts: Vec<usize> = out.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![2, 2, 1]);
        let wide = count_pts_within_radius(&x, &y, 1000.0, Scale::Log).unwrap();
        assert!(wide.iter().all(|c| c.count == 3));
    }

    #[test]
    fn rejects_bad_input() {
        let e = |r: Result<Vec<NeighborCount>, AnalysisError>| r.unwrap_err().is_invalid_input();
        assert!(e(count_pts_within_radius(&[1.0], &[1.0, 2.0], 1.0, Scale::Linear)));
        assert!(e(count_pts_within_radius(&[], &[], 1.0, Scale::Linear)));
        assert!(e(count_pts_within_radius(&[1.0], &[1.0], 0.0, Scale::Linear)));
        assert!(e(count_pts_within_radius(&[1.0], &[f64::NAN], 1.0, Scale::Linear)));
        assert!(e(count_pts_within_radius(&[0.0], &[1.0], 2.0, Scale::Log)));
    }

    #[test]
    fn scale_from_flag() {
        assert_eq!(Scale::from_log_flag(true), Scale::Log);
        assert_eq!(Scale::from_log_flag(false), Scale::Linear);
        assert_eq!(Scale::default(), Scale::Linear);
    }
}
