//! # phasecomp
//!
//! Closed-form optical and thermal formulas for optical-system modelling.
//!
//! - [`sellmeier`]: refractive index from four Sellmeier coefficients, with a
//!   linear thermo-optic correction; scalar or elementwise over wavelength.
//! - [`phase`]: phase accumulated over a propagation length.
//! - [`thermal`]: the shared 20 °C temperature offset and thermal expansion.
//! - [`material`]: coefficient bundles evaluated at one temperature.
//! - [`settings`]: layered configuration for the `phasecomp` evaluator.
//!
//! Wavelengths are in micrometres and temperatures in degrees Celsius. All
//! functions are pure; none of them performs unit conversion.

pub mod error;
pub mod material;
pub mod phase;
pub mod sellmeier;
pub mod settings;
pub mod thermal;
pub mod wavelength;

pub use error::OpticsError;
pub use material::{Evaluation, Material};
pub use phase::{phase_shift, SPEED_OF_LIGHT};
pub use sellmeier::{refractive_index, refractive_index_at_room_temperature, Sellmeier};
pub use thermal::{length_delta, temperature_delta, ROOM_TEMPERATURE};
pub use wavelength::Wavelength;
