use macroeco::density::Scale;
use macroeco::AnalysisError;
use pyo3::exceptions::{PyArithmeticError, PyValueError};
use pyo3::PyErr;

/// Invalid input maps to `ValueError`, degenerate computations to `ArithmeticError`.
pub fn map_analysis_err(err: AnalysisError) -> PyErr {
    match err {
        AnalysisError::InvalidInput { .. } => PyValueError::new_err(err.to_string()),
        AnalysisError::Degenerate { .. } => PyArithmeticError::new_err(err.to_string()),
    }
}

#[inline]
pub fn scale_from_flag(logscale: bool) -> Scale {
    Scale::from_log_flag(logscale)
}
