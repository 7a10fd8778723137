#![allow(clippy::uninlined_format_args)]

use approx::assert_abs_diff_eq;
use hydrogen_sim::figure::density_figure;
use hydrogen_sim::{
    density_curve, density_curve_over, radial_probability_density, DensityError, QuantumState,
    RadialOrbital, BOHR_RADIUS,
};
use proptest::prelude::*;

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn every_tabulated_state_is_normalized() {
    for orbital in RadialOrbital::ALL {
        let state = QuantumState::new(orbital.n(), orbital.l());
        let curve = density_curve_over(&state, 120.0 * BOHR_RADIUS, 24_000).unwrap();
        assert_abs_diff_eq!(curve.integral(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn default_domain_holds_most_of_the_compact_states() {
    for (n, l, min) in [(1, 0, 0.9999), (2, 0, 0.999), (2, 1, 0.999), (3, 2, 0.97)] {
        let integral = density_curve(&QuantumState::new(n, l)).unwrap().integral();
        assert!(
            integral > min && integral <= 1.0 + 1e-6,
            "{}{}: integral {}",
            n,
            l,
            integral
        );
    }
}

#[test]
fn scaling_with_atomic_number_preserves_normalization() {
    for z in 1..=10 {
        let state = QuantumState::new(2, 1).with_atomic_number(z);
        let r_max = 120.0 * BOHR_RADIUS / f64::from(z);
        let curve = density_curve_over(&state, r_max, 24_000).unwrap();
        assert_abs_diff_eq!(curve.integral(), 1.0, epsilon = 1e-5);
    }
}

// =============================================================================
// Boundary behaviour
// =============================================================================

#[test]
fn density_vanishes_at_the_nucleus() {
    for orbital in RadialOrbital::ALL {
        let state = QuantumState::new(orbital.n(), orbital.l());
        assert_eq!(radial_probability_density(&state, 0.0).unwrap(), 0.0);
    }
}

#[test]
fn states_outside_the_table_are_rejected() {
    for (n, l) in [(5, 0), (2, 2), (1, 1), (0, 0), (6, 5)] {
        let state = QuantumState::new(n, l);
        assert_eq!(
            density_curve(&state).unwrap_err(),
            DensityError::UnsupportedState { n, l }
        );
        assert!(radial_probability_density(&state, BOHR_RADIUS).is_err());
    }
}

#[test]
fn zero_atomic_number_is_rejected() {
    let state = QuantumState::new(1, 0).with_atomic_number(0);
    assert_eq!(
        density_curve(&state).unwrap_err(),
        DensityError::InvalidAtomicNumber(0)
    );
}

#[test]
fn larger_shells_peak_further_out() {
    let peaks: Vec<f64> = (1..=4)
        .map(|n| {
            density_curve(&QuantumState::new(n, n - 1))
                .unwrap()
                .most_probable_radius()
                .unwrap()
        })
        .collect();
    assert!(peaks.windows(2).all(|w| w[1] > w[0]), "{:?}", peaks);
}

// =============================================================================
// Properties
// =============================================================================

fn tabulated_state() -> impl Strategy<Value = QuantumState> {
    (0..RadialOrbital::ALL.len(), 1u32..=10).prop_map(|(i, z)| {
        let orbital = RadialOrbital::ALL[i];
        QuantumState::new(orbital.n(), orbital.l()).with_atomic_number(z)
    })
}

proptest! {
    #[test]
    fn density_is_finite_and_non_negative(
        state in tabulated_state(),
        r_bohr in 0.0f64..200.0,
    ) {
        let p = radial_probability_density(&state, r_bohr * BOHR_RADIUS).unwrap();
        prop_assert!(p.is_finite() && p >= 0.0, "P = {} for {:?}", p, state);
    }

    #[test]
    fn curves_are_deterministic(state in tabulated_state()) {
        prop_assert_eq!(density_curve(&state).unwrap(), density_curve(&state).unwrap());
    }

    #[test]
    fn figures_exist_for_every_supported_l(l in 0u32..4, z in 1u32..=10) {
        let figure = density_figure(l, z).unwrap();
        prop_assert_eq!(figure.series.len() as u32, 4 - l);
        let bounds = figure.bounds();
        prop_assert!(bounds.width() > 0.0 && bounds.height() > 0.0);
    }
}
