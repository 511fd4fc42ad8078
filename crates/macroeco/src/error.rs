//! Error types shared by the analysis helpers.
//!
//! Two failure kinds cover every numeric routine: the caller handed us
//! something malformed, or the input is well-formed but the computation has
//! no meaningful answer (zero sum, zero variance, too few points).

use thiserror::Error;

/// Error returned by the numeric routines (`rad`, `density`, `hull`, `stats`).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Mismatched lengths, empty sequences, non-positive radius or confidence.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    /// Zero-sum abundances, zero-variance denominators, too few hull points.
    #[error("degenerate computation: {reason}")]
    Degenerate { reason: String },
}

impl AnalysisError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::Degenerate {
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }
}

/// Check that two paired sequences are non-empty and of equal length.
pub(crate) fn check_paired(
    x_name: &str,
    x: &[f64],
    y_name: &str,
    y: &[f64],
) -> Result<(), AnalysisError> {
    if x.len() != y.len() {
        return Err(AnalysisError::invalid(format!(
            "{x_name} and {y_name} differ in length ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    if x.is_empty() {
        return Err(AnalysisError::invalid(format!("{x_name} is empty")));
    }
    Ok(())
}
