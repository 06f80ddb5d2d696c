//! Linear temperature corrections relative to room temperature.
//!
//! Both the thermo-optic correction of the refractive index and the thermal
//! expansion of a material are modelled as a first-order offset from a fixed
//! 20 °C reference. This module holds that shared helper and the length
//! expansion built on top of it.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_temperature_is_fixed_point() {
        for d in [0.0, 1e-5, -3.2, 1e6] {
            assert_eq!(temperature_delta(d, ROOM_TEMPERATURE), 0.0);
        }
    }

    #[test]
    fn zero_coefficient_gives_no_offset() {
        assert_eq!(temperature_delta(0.0, 150.0), 0.0);
        assert_eq!(temperature_delta(0.0, -40.0), 0.0);
    }

    #[test]
    fn delta_is_linear_in_temperature() {
        let result = temperature_delta(1e-5, 25.0);
        assert!((result - 5e-5).abs() < 1e-15, "result: {}", result);

        let result = temperature_delta(2.0, 10.0);
        assert!((result + 20.0).abs() < 1e-12, "result: {}", result);
    }

    #[test]
    fn expansion_at_room_temperature_vanishes() {
        for l0 in [0.0, 1.0, 1e3] {
            assert_eq!(length_delta(l0, 1e-6, ROOM_TEMPERATURE), 0.0);
        }
    }

    #[test]
    fn expansion_of_heated_rod() {
        let result = length_delta(10.0, 1e-6, 120.0);
        assert!((result - 0.001).abs() < 1e-15, "result: {}", result);
    }

    #[test]
    fn cooling_contracts() {
        let result = length_delta(5.0, 2e-5, 0.0);
        assert!(result < 0.0);
        assert!((result + 0.002).abs() < 1e-15, "result: {}", result);
    }
}

/// Reference temperature (°C) at which all temperature corrections vanish.
pub const ROOM_TEMPERATURE: f64 = 20.0;

/// Change of a quantity at `temperature` given its linear coefficient.
///
/// Evaluates `(temperature - 20) * coefficient`. Any finite input is legal;
/// a zero coefficient or room temperature yields exactly zero.
pub fn temperature_delta(coefficient: f64, temperature: f64) -> f64 {
    (temperature - ROOM_TEMPERATURE) * coefficient
}

/// Change in length of a material heated (or cooled) away from 20 °C.
///
/// `reference_length` is the length at room temperature and `alpha` the
/// linear thermal expansion coefficient. The result is in the units of
/// `reference_length`.
pub fn length_delta(reference_length: f64, alpha: f64, temperature: f64) -> f64 {
    reference_length * temperature_delta(alpha, temperature)
}
