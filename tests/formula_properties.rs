use std::f64::consts::PI;

use phasecomp::{
    length_delta, phase_shift, refractive_index, refractive_index_at_room_temperature, settings,
    temperature_delta, OpticsError, Wavelength, ROOM_TEMPERATURE,
};

const ALPHAS: [f64; 4] = [2.0, 0.01, 0.02, 0.001];
const BBO_O: [f64; 4] = [2.7359, 0.01878, 0.01822, 0.01354];

fn scalar(result: Wavelength) -> f64 {
    result.as_scalar().expect("scalar input gives scalar output")
}

#[test]
fn defaults_match_the_bare_formula() {
    for &w in &[0.3, 0.55, 1.0, 1.31, 2.0] {
        let w2 = w * w;
        let expected = (ALPHAS[0] + ALPHAS[1] / (w2 - ALPHAS[2]) - ALPHAS[3] * w2).sqrt();
        let n = scalar(refractive_index(w, &ALPHAS, 0.0, 20.0).unwrap());
        assert_eq!(n, expected);
        let n = scalar(refractive_index_at_room_temperature(w, &ALPHAS).unwrap());
        assert_eq!(n, expected);
    }
}

#[test]
fn worked_index_example() {
    let n = scalar(refractive_index(1.0, &ALPHAS, 0.0, 20.0).unwrap());
    assert!((n - 1.41747).abs() < 1e-5, "n: {}", n);

    let n = scalar(refractive_index(1.0, &ALPHAS, 1e-5, 25.0).unwrap());
    assert!((n - 1.41752).abs() < 1e-5, "n: {}", n);
}

#[test]
fn bbo_ordinary_index() {
    // tabulated n_o of beta-BaB2O4
    let n = refractive_index(vec![0.532, 1.064], &BBO_O, 0.0, 20.0).unwrap().to_vec();
    assert!((n[0] - 1.6742).abs() < 1e-4, "n: {:?}", n);
    assert!((n[1] - 1.6545).abs() < 1e-4, "n: {:?}", n);
    assert!(n[0] > n[1], "normal dispersion");
}

#[test]
fn sequence_is_elementwise() {
    let (w1, w2) = (0.7, 1.9);
    let both = refractive_index(vec![w1, w2], &ALPHAS, 3e-6, 55.0).unwrap();
    let first = scalar(refractive_index(w1, &ALPHAS, 3e-6, 55.0).unwrap());
    let second = scalar(refractive_index(w2, &ALPHAS, 3e-6, 55.0).unwrap());
    assert_eq!(both.to_vec(), vec![first, second]);
}

#[test]
fn empty_sequence_gives_empty_result() {
    let result = refractive_index(Vec::<f64>::new(), &ALPHAS, 0.0, 20.0).unwrap();
    assert!(!result.is_scalar());
    assert!(result.is_empty());
}

#[test]
fn wrong_coefficient_count_is_a_configuration_error() {
    let err = refractive_index(1.0, &[1.0, 2.0, 3.0], 0.0, 20.0).unwrap_err();
    assert!(matches!(
        err,
        OpticsError::Configuration {
            parameter: "alphas",
            ..
        }
    ));
    assert!(err.to_string().contains('3'), "{}", err);

    let err = refractive_index(vec![1.0, 2.0], &[1.0; 5], 0.0, 20.0).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn pole_in_a_sequence_fails_the_whole_call() {
    let alphas = [2.0, 0.01, 0.25, 0.001];
    let err = refractive_index(vec![1.0, 0.5, 1.5], &alphas, 0.0, 20.0).unwrap_err();
    match err {
        OpticsError::Domain {
            parameter, value, ..
        } => {
            assert_eq!(parameter, "wavelength");
            assert_eq!(value, 0.5);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn room_temperature_is_a_fixed_point() {
    for d in [-1.0, 0.0, 2.5e-5, 42.0] {
        assert_eq!(temperature_delta(d, ROOM_TEMPERATURE), 0.0);
    }
    for (l0, alpha) in [(1.0, 1e-6), (250.0, -3e-7), (0.0, 5.0)] {
        assert_eq!(length_delta(l0, alpha, 20.0), 0.0);
    }
}

#[test]
fn thermal_expansion_example() {
    let dl = length_delta(10.0, 1e-6, 120.0);
    assert!((dl - 0.001).abs() < 1e-15, "dl: {}", dl);
}

#[test]
fn phase_shift_example_and_linearity() {
    let phi = phase_shift(1.5, 100.0, 1.5).unwrap();
    assert!((phi - 200.0 * PI).abs() < 1e-9, "phi: {}", phi);

    let base = phase_shift(0.633, 7.0, 1.46).unwrap();
    assert!((phase_shift(0.633, 14.0, 1.46).unwrap() - 2.0 * base).abs() < 1e-9);
    assert!((phase_shift(0.633, 7.0, 2.92).unwrap() - 2.0 * base).abs() < 1e-9);
}

#[test]
fn phase_shift_rejects_zero_wavelength() {
    assert!(phase_shift(0.0, 1.0, 1.0).unwrap_err().is_domain());
}

#[test]
fn default_configuration_evaluates() {
    let settings = settings::load_default_config().unwrap();
    let evaluation = settings
        .material
        .evaluate(
            &settings.wavelengths,
            settings.temperature,
            settings.reference_length,
        )
        .unwrap();
    assert_eq!(evaluation.indices.len(), settings.wavelengths.len());
    assert_eq!(evaluation.length_delta, 0.0);
    assert!(evaluation.phases.iter().all(|phi| *phi > 0.0));
    assert!(evaluation.to_string().contains("BBO"));
}
