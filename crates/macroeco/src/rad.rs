//! Rank-abundance distributions (RAD).
//!
//! - `get_rad_data`: ranks and relative abundances of an observed community.
//! - `get_rad_from_cdf`: predicted abundances per rank from a theoretical
//!   distribution, evaluated at the rank midpoints `(r - 0.5) / S`.
//!
//! Inputs are borrowed and never reordered; sorting happens on a copy.

use crate::error::AnalysisError;

/// Ranks `1..=S` paired with relative abundances sorted descending.
#[derive(Clone, Debug, PartialEq)]
pub struct Rad {
    pub ranks: Vec<usize>,
    pub relative: Vec<f64>,
}

impl Rad {
    #[inline]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// `(rank, relative abundance)` pairs as plotting coordinates.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.ranks
            .iter()
            .zip(&self.relative)
            .map(|(&r, &p)| (r as f64, p))
            .collect()
    }
}

/// Copy of `abundances` sorted descending.
///
/// Validates that the vector is non-empty and holds finite, non-negative values.
pub fn sorted_descending(abundances: &[f64]) -> Result<Vec<f64>, AnalysisError> {
    if abundances.is_empty() {
        return Err(AnalysisError::invalid("abundance vector is empty"));
    }
    if let Some(bad) = abundances.iter().find(|n| !n.is_finite() || **n < 0.0) {
        return Err(AnalysisError::invalid(format!(
            "abundances must be finite and non-negative, got {bad}"
        )));
    }
    let mut sorted = abundances.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    Ok(sorted)
}

/// Ranks and relative abundances for a vector of abundances.
///
/// Relative abundance is `n / Σn` over the descending sort. Fails with
/// `Degenerate` when every abundance is zero.
pub fn get_rad_data(abundances: &[f64]) -> Result<Rad, AnalysisError> {
    let sorted = sorted_descending(abundances)?;
    let total: f64 = sorted.iter().sum();
    if total <= 0.0 {
        return Err(AnalysisError::degenerate(
            "abundances sum to zero; relative abundance undefined",
        ));
    }
    let relative = sorted.iter().map(|n| n / total).collect();
    let ranks = (1..=sorted.len()).collect();
    Ok(Rad { ranks, relative })
}

/// Cumulative probabilities `(r - 0.5) / s` at which rank `r` is evaluated.
pub fn rank_midpoints(s: usize) -> Result<Vec<f64>, AnalysisError> {
    if s == 0 {
        return Err(AnalysisError::invalid("species count S must be > 0"));
    }
    let s_f = s as f64;
    Ok((1..=s).map(|rank| (rank as f64 - 0.5) / s_f).collect())
}

/// Round predicted abundances to the nearest integer, half away from zero.
///
/// Values that round to a negative or non-finite number are rejected.
pub fn round_abundances(values: &[f64]) -> Result<Vec<u64>, AnalysisError> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let rounded = v.round();
            if !rounded.is_finite() || rounded < 0.0 {
                return Err(AnalysisError::degenerate(format!(
                    "predicted abundance {v} at rank {} must be finite and >= 0",
                    i + 1
                )));
            }
            Ok(rounded as u64)
        })
        .collect()
}

/// Predicted rank-abundance distribution from a theoretical distribution.
///
/// `cdf` maps a cumulative probability in `[0, 1]` to an abundance (the
/// quantile function of the theoretical distribution). Rank `r` of `s`
/// receives `round(cdf((r - 0.5) / s))`. The result is in rank order and is
/// not forced to be non-increasing.
pub fn get_rad_from_cdf<F>(cdf: F, s: usize) -> Result<Vec<u64>, AnalysisError>
where
    F: Fn(f64) -> f64,
{
    let values: Vec<f64> = rank_midpoints(s)?.into_iter().map(cdf).collect();
    let out = round_abundances(&values)?;
    tracing::debug!(species = s, "predicted rad from cdf");
    Ok(out)
}
