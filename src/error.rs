//! Error taxonomy for the optical formulas.
//!
//! Every fallible evaluation returns an [`OpticsError`]. There are two kinds:
//! structural problems with the inputs (a coefficient set of the wrong length)
//! and numerical domain violations (division by zero or the square root of a
//! negative number). Errors are raised as soon as they are detected; no
//! partial results are ever returned.

use thiserror::Error;

/// Errors raised by the formula evaluators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpticsError {
    /// Input has the wrong structure, e.g. a Sellmeier set without exactly four terms.
    #[error("invalid configuration for `{parameter}`: {reason}")]
    Configuration {
        parameter: &'static str,
        reason: String,
    },

    /// A formula was evaluated outside the real domain.
    #[error("domain error in `{parameter}` = {value}: {reason}")]
    Domain {
        parameter: &'static str,
        value: f64,
        reason: String,
    },
}

impl OpticsError {
    pub fn configuration(parameter: &'static str, reason: impl Into<String>) -> Self {
        let err = OpticsError::Configuration {
            parameter,
            reason: reason.into(),
        };
        log::debug!("{}", err);
        err
    }

    pub fn domain(parameter: &'static str, value: f64, reason: impl Into<String>) -> Self {
        let err = OpticsError::Domain {
            parameter,
            value,
            reason: reason.into(),
        };
        log::debug!("{}", err);
        err
    }

    /// Returns `true` for numerical domain violations.
    pub fn is_domain(&self) -> bool {
        matches!(self, OpticsError::Domain { .. })
    }

    /// Returns `true` for structural input errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, OpticsError::Configuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, OpticsError>;
