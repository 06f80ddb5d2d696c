use phasecomp::{OpticsError, Wavelength};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(err: OpticsError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// A float or a list of floats.
#[derive(FromPyObject, IntoPyObject)]
enum Values {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl From<Values> for Wavelength {
    fn from(values: Values) -> Self {
        match values {
            Values::Scalar(value) => Wavelength::from(value),
            Values::Sequence(values) => Wavelength::from(values),
        }
    }
}

impl From<Wavelength> for Values {
    fn from(wavelength: Wavelength) -> Self {
        match wavelength {
            Wavelength::Scalar(value) => Values::Scalar(value),
            Wavelength::Sequence(values) => Values::Sequence(values.to_vec()),
        }
    }
}

/// Refractive index from four Sellmeier coefficients.
///
/// Takes a wavelength (um) or a list of wavelengths and returns the same
/// shape. `dn_dT` and `T` add the offset `dn_dT * (T - 20)`.
#[pyfunction]
#[pyo3(signature = (wavelength, alphas, dn_dT = 0.0, T = 20.0))]
#[allow(non_snake_case)]
fn refractive_index(wavelength: Values, alphas: Vec<f64>, dn_dT: f64, T: f64) -> PyResult<Values> {
    phasecomp::refractive_index(wavelength, &alphas, dn_dT, T)
        .map(Values::from)
        .map_err(to_py_err)
}

/// Phase (radians) accumulated over length `L` in a medium of index `n`.
#[pyfunction]
#[pyo3(signature = (wavelength, L, n))]
#[allow(non_snake_case)]
fn phase_shift(wavelength: f64, L: f64, n: f64) -> PyResult<f64> {
    phasecomp::phase_shift(wavelength, L, n).map_err(to_py_err)
}

/// Change in length relative to 20 C.
#[pyfunction]
#[pyo3(signature = (L_0, alpha, T))]
#[allow(non_snake_case)]
fn length_delta(L_0: f64, alpha: f64, T: f64) -> f64 {
    phasecomp::length_delta(L_0, alpha, T)
}

/// Change of a quantity with coefficient `d` at temperature `T`, relative to 20 C.
#[pyfunction]
#[pyo3(signature = (d, T))]
#[allow(non_snake_case)]
fn temperature_delta(d: f64, T: f64) -> f64 {
    phasecomp::temperature_delta(d, T)
}

/// Sellmeier index, propagation phase and thermal expansion.
#[pymodule]
#[pyo3(name = "_phasecomp")]
fn phasecomp_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(refractive_index, m)?)?;
    m.add_function(wrap_pyfunction!(phase_shift, m)?)?;
    m.add_function(wrap_pyfunction!(length_delta, m)?)?;
    m.add_function(wrap_pyfunction!(temperature_delta, m)?)?;
    m.add("ROOM_TEMPERATURE", phasecomp::ROOM_TEMPERATURE)?;
    m.add("SPEED_OF_LIGHT", phasecomp::SPEED_OF_LIGHT)?;
    Ok(())
}
