//! Numeric bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{map_analysis_err, scale_from_flag};
use macroeco::hull::HullCfg;
use pyo3::prelude::*;

/// Ranks and relative abundances, sorted descending.
#[pyfunction]
pub fn get_rad_data(abundances: Vec<f64>) -> PyResult<(Vec<usize>, Vec<f64>)> {
    let rad = macroeco::rad::get_rad_data(&abundances).map_err(map_analysis_err)?;
    Ok((rad.ranks, rad.relative))
}

/// Predicted RAD from a Python callable quantile function.
#[pyfunction]
pub fn get_rad_from_cdf(py: Python<'_>, cdf: PyObject, s: usize) -> PyResult<Vec<u64>> {
    let midpoints = macroeco::rad::rank_midpoints(s).map_err(map_analysis_err)?;
    let values = midpoints
        .into_iter()
        .map(|p| cdf.call1(py, (p,))?.extract::<f64>(py))
        .collect::<PyResult<Vec<f64>>>()?;
    macroeco::rad::round_abundances(&values).map_err(map_analysis_err)
}

/// `(x, y, count)` per unique point.
#[pyfunction]
#[pyo3(signature = (x, y, radius, logscale=false))]
pub fn count_pts_within_radius(
    x: Vec<f64>,
    y: Vec<f64>,
    radius: f64,
    logscale: bool,
) -> PyResult<Vec<(f64, f64, usize)>> {
    let counts =
        macroeco::density::count_pts_within_radius(&x, &y, radius, scale_from_flag(logscale))
            .map_err(map_analysis_err)?;
    Ok(counts.into_iter().map(|c| (c.x, c.y, c.count)).collect())
}

/// Hull vertices (counter-clockwise, open) of the densest points.
#[pyfunction]
#[pyo3(signature = (x, y, radius, confidence_int=0.95, logscale=false))]
pub fn confidence_hull(
    x: Vec<f64>,
    y: Vec<f64>,
    radius: f64,
    confidence_int: f64,
    logscale: bool,
) -> PyResult<Vec<(f64, f64)>> {
    let cfg = HullCfg {
        confidence: confidence_int,
        scale: scale_from_flag(logscale),
    };
    let hull = macroeco::hull::confidence_hull(&x, &y, radius, cfg).map_err(map_analysis_err)?;
    Ok(hull.vertices.iter().map(|p| (p.x, p.y)).collect())
}

#[pyfunction]
pub fn e_var(abundances: Vec<f64>) -> PyResult<f64> {
    macroeco::stats::e_var(&abundances).map_err(map_analysis_err)
}

#[pyfunction]
pub fn obs_pred_rsquare(obs: Vec<f64>, pred: Vec<f64>) -> PyResult<f64> {
    macroeco::stats::obs_pred_rsquare(&obs, &pred).map_err(map_analysis_err)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(get_rad_data, m)?)?;
    m.add_function(wrap_pyfunction!(get_rad_from_cdf, m)?)?;
    m.add_function(wrap_pyfunction!(count_pts_within_radius, m)?)?;
    m.add_function(wrap_pyfunction!(confidence_hull, m)?)?;
    m.add_function(wrap_pyfunction!(e_var, m)?)?;
    m.add_function(wrap_pyfunction!(obs_pred_rsquare, m)?)?;
    Ok(())
}
