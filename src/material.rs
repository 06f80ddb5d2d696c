//! Named materials and single-point evaluations.
//!
//! A [`Material`] bundles the coefficients the formulas need: the Sellmeier
//! terms, the thermo-optic coefficient and the linear thermal expansion
//! coefficient. [`Material::evaluate`] runs all of them at one temperature and
//! gathers the outputs in an [`Evaluation`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::phase::phase_shift;
use crate::sellmeier::Sellmeier;
use crate::thermal::{length_delta, temperature_delta};


/// Optical and thermal coefficients of one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Sellmeier terms `[A, B, C, D]`, wavelengths in micrometres.
    pub alphas: Sellmeier,
    /// Thermo-optic coefficient dn/dT (per °C).
    #[serde(default)]
    pub dn_dt: f64,
    /// Linear thermal expansion coefficient (per °C).
    #[serde(default)]
    pub expansion: f64,
}

impl Material {
    /// Evaluates the material at `temperature` for each wavelength.
    ///
    /// `reference_length` is the propagation length at room temperature. The
    /// phase is computed over the thermally expanded length, with the index
    /// corrected to the same temperature.
    pub fn evaluate(
        &self,
        wavelengths: &[f64],
        temperature: f64,
        reference_length: f64,
    ) -> Result<Evaluation> {
        let indices = self.alphas.indices(wavelengths, self.dn_dt, temperature)?;
        let length_delta = length_delta(reference_length, self.expansion, temperature);
        let path_length = reference_length + length_delta;

        let phases = wavelengths
            .iter()
            .zip(indices.iter())
            .map(|(&w, &n)| phase_shift(w, path_length, n))
            .collect::<Result<Vec<f64>>>()?;

        Ok(Evaluation {
            material: self.name.clone(),
            temperature,
            delta_n: temperature_delta(self.dn_dt, temperature),
            reference_length,
            length_delta,
            path_length,
            wavelengths: wavelengths.to_vec(),
            indices,
            phases,
        })
    }
}

/// Results of evaluating one material at one temperature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub material: String,
    pub temperature: f64,
    pub delta_n: f64,
    pub reference_length: f64,
    pub length_delta: f64,
    pub path_length: f64,
    pub wavelengths: Vec<f64>,
    pub indices: Vec<f64>,
    pub phases: Vec<f64>,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Evaluation:
  - Material: {}
  - Temperature: {:.3} C
  - Index Offset: {:.6e}
  - Reference Length: {:.6}
  - Length Delta: {:.6e}
  - Path Length: {:.6}",
            self.material,
            self.temperature,
            self.delta_n,
            self.reference_length,
            self.length_delta,
            self.path_length,
        )?;
        writeln!(f, "  {:>12} {:>12} {:>16}", "wavelength", "n", "phase (rad)")?;
        for ((w, n), phi) in self
            .wavelengths
            .iter()
            .zip(self.indices.iter())
            .zip(self.phases.iter())
        {
            writeln!(f, "  {:>12.6} {:>12.8} {:>16.6}", w, n, phi)?;
        }
        Ok(())
    }
}
