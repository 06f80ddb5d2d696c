//! Phase accumulated by light propagating through a material.

use std::f64::consts::PI;

use crate::error::{OpticsError, Result};


/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;

/// Phase (radians) accumulated over `length` in a medium of index `n`.
///
/// Evaluates `2π · length · n / wavelength`, with `length` and `wavelength`
/// in the same units. A zero wavelength, or any input that makes the phase
/// NaN or infinite, is a domain error.
pub fn phase_shift(wavelength: f64, length: f64, n: f64) -> Result<f64> {
    if wavelength == 0.0 {
        return Err(OpticsError::domain(
            "wavelength",
            wavelength,
            "phase shift divides by the wavelength",
        ));
    }
    let phi = 2.0 * PI * length * n / wavelength;
    if !phi.is_finite() {
        return Err(OpticsError::domain(
            "wavelength",
            wavelength,
            format!("phase {} is not finite (length {}, n {})", phi, length, n),
        ));
    }
    log::trace!(
        "phase_shift(wavelength={}, length={}, n={}) = {}",
        wavelength,
        length,
        n,
        phi
    );
    Ok(phi)
}
