//! PyO3 bindings for selected `macroeco` functions.
//!
//! Notes
//! - Keep bindings thin and predictable: plain lists and tuples in, plain
//!   lists and tuples out. NumPy conversion stays on the Python side.
//! - Only the numeric routines are bound; plotting stays in Rust.

mod common;
mod numeric;

use pyo3::prelude::*;

#[pymodule]
fn macroeco_native(_py: Python, m: &PyModule) -> PyResult<()> {
    numeric::register(m)?;
    m.add("__version__", macroeco::VERSION)?;
    Ok(())
}
