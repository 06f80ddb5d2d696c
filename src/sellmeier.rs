//! Sellmeier dispersion with a linear thermo-optic correction.
//!
//! The index follows the four-term form
//!
//! ```text
//! n(λ) = sqrt(A + B / (λ² - C) - D λ²) + dn/dT · (T - 20)
//! ```
//!
//! with λ in micrometres and T in °C. The temperature correction is a single
//! offset shared by every wavelength; it does not depend on λ.
//!
//! # Domain policy
//!
//! Evaluation never returns NaN or infinity. A vanishing denominator
//! (`λ² == C`), a negative or non-finite radicand, or a corrected index that
//! overflows is reported as [`OpticsError::Domain`] naming the offending
//! wavelength. For sequence
//! input a single bad element fails the whole call, and the error reported is
//! always that of the first bad element in sequence order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{OpticsError, Result};
use crate::thermal::{temperature_delta, ROOM_TEMPERATURE};
use crate::wavelength::Wavelength;


/// Sequences at least this long are evaluated on the rayon thread pool.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Four Sellmeier coefficients `[A, B, C, D]`.
///
/// The length is checked once on construction from untyped input, so every
/// evaluation can index the terms directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Sellmeier([f64; 4]);

impl Sellmeier {
    pub fn new(alphas: [f64; 4]) -> Self {
        Sellmeier(alphas)
    }

    pub fn alphas(&self) -> &[f64; 4] {
        &self.0
    }

    /// Square of the uncorrected index, checked for the real domain.
    fn radicand(&self, wavelength: f64) -> Result<f64> {
        let [a, b, c, d] = self.0;
        let w2 = wavelength * wavelength;
        let denom = w2 - c;
        if denom == 0.0 {
            return Err(OpticsError::domain(
                "wavelength",
                wavelength,
                format!("wavelength squared equals the pole coefficient {}", c),
            ));
        }
        let radicand = a + b / denom - d * w2;
        if radicand < 0.0 {
            return Err(OpticsError::domain(
                "wavelength",
                wavelength,
                format!("negative radicand {} under the square root", radicand),
            ));
        }
        if !radicand.is_finite() {
            return Err(OpticsError::domain(
                "wavelength",
                wavelength,
                format!("radicand {} is not finite", radicand),
            ));
        }
        Ok(radicand)
    }

    /// Uncorrected index at room temperature.
    pub fn index(&self, wavelength: f64) -> Result<f64> {
        self.radicand(wavelength).map(f64::sqrt)
    }

    /// Index at `temperature` with thermo-optic coefficient `dn_dt`.
    pub fn index_at(&self, wavelength: f64, dn_dt: f64, temperature: f64) -> Result<f64> {
        let delta_n = temperature_delta(dn_dt, temperature);
        self.corrected(wavelength, delta_n)
    }

    fn corrected(&self, wavelength: f64, delta_n: f64) -> Result<f64> {
        let n = self.index(wavelength)? + delta_n;
        if !n.is_finite() {
            return Err(OpticsError::domain(
                "wavelength",
                wavelength,
                format!("corrected index {} is not finite (offset {})", n, delta_n),
            ));
        }
        Ok(n)
    }

    /// Elementwise index over a sequence of wavelengths.
    pub fn indices(&self, wavelengths: &[f64], dn_dt: f64, temperature: f64) -> Result<Vec<f64>> {
        let delta_n = temperature_delta(dn_dt, temperature);
        log::trace!(
            "evaluating {} wavelengths, delta_n = {}",
            wavelengths.len(),
            delta_n
        );

        if wavelengths.len() < PARALLEL_THRESHOLD {
            return wavelengths
                .iter()
                .map(|&w| self.corrected(w, delta_n))
                .collect();
        }

        // collect everything first so the reported error does not depend on scheduling
        let evaluated: Vec<Result<f64>> = wavelengths
            .par_iter()
            .map(|&w| self.corrected(w, delta_n))
            .collect();
        evaluated.into_iter().collect()
    }

    /// Shape-preserving evaluation: scalar in, scalar out; sequence in, sequence out.
    pub fn evaluate(&self, wavelength: &Wavelength, dn_dt: f64, temperature: f64) -> Result<Wavelength> {
        match wavelength {
            Wavelength::Sequence(values) if values.len() >= PARALLEL_THRESHOLD => {
                let n = match values.as_slice() {
                    Some(slice) => self.indices(slice, dn_dt, temperature)?,
                    None => self.indices(&values.to_vec(), dn_dt, temperature)?,
                };
                Ok(Wavelength::from(n))
            }
            _ => {
                let delta_n = temperature_delta(dn_dt, temperature);
                wavelength.try_map(|w| self.corrected(w, delta_n))
            }
        }
    }
}

impl TryFrom<&[f64]> for Sellmeier {
    type Error = OpticsError;

    fn try_from(alphas: &[f64]) -> Result<Self> {
        let terms: [f64; 4] = alphas.try_into().map_err(|_| {
            OpticsError::configuration(
                "alphas",
                format!("expected exactly 4 Sellmeier coefficients, got {}", alphas.len()),
            )
        })?;
        Ok(Sellmeier(terms))
    }
}

impl TryFrom<Vec<f64>> for Sellmeier {
    type Error = OpticsError;

    fn try_from(alphas: Vec<f64>) -> Result<Self> {
        Sellmeier::try_from(alphas.as_slice())
    }
}

impl From<Sellmeier> for Vec<f64> {
    fn from(sellmeier: Sellmeier) -> Self {
        sellmeier.0.to_vec()
    }
}

/// Refractive index of a material described by four Sellmeier coefficients.
///
/// `wavelength` may be a scalar or a sequence (micrometres); the result has
/// the same shape. `dn_dt` and `temperature` add the linear thermo-optic
/// offset `dn_dt · (temperature - 20)` to every element.
///
/// # Errors
///
/// [`OpticsError::Configuration`] if `alphas` does not hold exactly four
/// values, [`OpticsError::Domain`] if any element hits the pole or a negative
/// radicand.
///
/// # Example
/// ```rust
/// use phasecomp::sellmeier::refractive_index;
///
/// let n = refractive_index(1.0, &[2.0, 0.01, 0.02, 0.001], 1e-5, 25.0).unwrap();
/// assert!((n.as_scalar().unwrap() - 1.41752).abs() < 1e-5);
/// ```
pub fn refractive_index(
    wavelength: impl Into<Wavelength>,
    alphas: &[f64],
    dn_dt: f64,
    temperature: f64,
) -> Result<Wavelength> {
    let sellmeier = Sellmeier::try_from(alphas)?;
    sellmeier.evaluate(&wavelength.into(), dn_dt, temperature)
}

/// [`refractive_index`] with no thermo-optic correction.
pub fn refractive_index_at_room_temperature(
    wavelength: impl Into<Wavelength>,
    alphas: &[f64],
) -> Result<Wavelength> {
    refractive_index(wavelength, alphas, 0.0, ROOM_TEMPERATURE)
}
