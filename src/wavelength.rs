//! Scalar-or-sequence values for shape-preserving evaluation.
//!
//! Formulas that broadcast over wavelength take a [`Wavelength`] and hand back
//! a value of the same shape: a scalar in gives a scalar out, a sequence in
//! gives an elementwise sequence out.

use ndarray::Array1;
use serde::Serialize;


/// A single value or an ordered sequence of values, in micrometres when used
/// as a wavelength.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Wavelength {
    Scalar(f64),
    Sequence(Array1<f64>),
}

impl Wavelength {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Wavelength::Scalar(_))
    }

    /// Number of elements; a scalar counts as one.
    pub fn len(&self) -> usize {
        match self {
            Wavelength::Scalar(_) => 1,
            Wavelength::Sequence(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value, if this is a scalar.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Wavelength::Scalar(value) => Some(*value),
            Wavelength::Sequence(_) => None,
        }
    }

    /// The values in order. A scalar becomes a one-element vector.
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Wavelength::Scalar(value) => vec![*value],
            Wavelength::Sequence(values) => values.to_vec(),
        }
    }

    /// Applies `f` to every element and keeps the shape. The first failing
    /// element, in sequence order, aborts the whole map.
    pub fn try_map<E, F>(&self, mut f: F) -> Result<Wavelength, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        match self {
            Wavelength::Scalar(value) => f(*value).map(Wavelength::Scalar),
            Wavelength::Sequence(values) => values
                .iter()
                .map(|&value| f(value))
                .collect::<Result<Vec<f64>, E>>()
                .map(|mapped| Wavelength::Sequence(Array1::from(mapped))),
        }
    }
}

impl From<f64> for Wavelength {
    fn from(value: f64) -> Self {
        Wavelength::Scalar(value)
    }
}

impl From<Vec<f64>> for Wavelength {
    fn from(values: Vec<f64>) -> Self {
        Wavelength::Sequence(Array1::from(values))
    }
}

impl From<&[f64]> for Wavelength {
    fn from(values: &[f64]) -> Self {
        Wavelength::Sequence(Array1::from(values.to_vec()))
    }
}

impl From<Array1<f64>> for Wavelength {
    fn from(values: Array1<f64>) -> Self {
        Wavelength::Sequence(values)
    }
}
