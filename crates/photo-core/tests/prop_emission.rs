// ─────────────────────────────────────────────────────────────────────
// SCPN Photoemission Lab — Property-Based Tests (proptest) for photo-core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for the emission model.
//!
//! Covers: sign and cutoff invariants of the I–V model, monotonicity
//! of photon energy, linear intensity scaling.

use photo_core::emission::{
    photocurrent_ua, photon_energy_ev, stopping_potential_v, threshold_wavelength_m,
};
use photo_types::catalog::METALS;
use photo_types::constants::M_TO_NM;
use proptest::prelude::*;

proptest! {
    /// The stopping potential is never negative.
    #[test]
    fn stopping_potential_nonnegative(
        metal_index in 0usize..METALS.len(),
        wavelength in 100.0f64..700.0,
    ) {
        let vs = stopping_potential_v(&METALS[metal_index], wavelength);
        prop_assert!(vs >= 0.0);
    }

    /// Zero exactly when the photon energy does not exceed the work
    /// function.
    #[test]
    fn stopping_potential_zero_iff_below_threshold(
        metal_index in 0usize..METALS.len(),
        wavelength in 100.0f64..700.0,
    ) {
        let metal = &METALS[metal_index];
        let vs = stopping_potential_v(metal, wavelength);
        if photon_energy_ev(wavelength) <= metal.work_function_ev {
            prop_assert_eq!(vs, 0.0);
        } else {
            prop_assert!(vs > 0.0);
        }
    }

    /// Photon energy decreases with wavelength.
    #[test]
    fn photon_energy_monotone(
        w1 in 100.0f64..700.0,
        delta in 1.0f64..100.0,
    ) {
        prop_assert!(photon_energy_ev(w1) > photon_energy_ev(w1 + delta));
    }

    /// The current is never negative, and is suppressed at or above the
    /// stopping potential.
    #[test]
    fn current_nonnegative_and_cut_off(
        metal_index in 0usize..METALS.len(),
        wavelength in 100.0f64..700.0,
        intensity in 0.0f64..10.0,
        area in 0.01f64..1.0,
        voltage in -3.0f64..3.0,
    ) {
        let metal = &METALS[metal_index];
        let i = photocurrent_ua(metal, wavelength, intensity, area, voltage);
        prop_assert!(i >= 0.0);
        if voltage >= stopping_potential_v(metal, wavelength) {
            prop_assert_eq!(i, 0.0);
        }
    }

    /// Doubling the intensity doubles the current.
    #[test]
    fn current_linear_in_intensity(
        metal_index in 0usize..METALS.len(),
        wavelength in 100.0f64..700.0,
        intensity in 0.1f64..5.0,
        area in 0.01f64..1.0,
        voltage in -3.0f64..3.0,
    ) {
        let metal = &METALS[metal_index];
        let single = photocurrent_ua(metal, wavelength, intensity, area, voltage);
        let doubled = photocurrent_ua(metal, wavelength, 2.0 * intensity, area, voltage);
        prop_assert!((doubled - 2.0 * single).abs() <= 1e-9 * doubled.max(1.0));
    }

    /// A wavelength above a metal's threshold wavelength never emits.
    #[test]
    fn beyond_threshold_wavelength_no_emission(
        metal_index in 0usize..METALS.len(),
        excess in 1.0f64..200.0,
        intensity in 0.0f64..10.0,
        voltage in -3.0f64..3.0,
    ) {
        let metal = &METALS[metal_index];
        let wavelength = threshold_wavelength_m(metal) * M_TO_NM + excess;
        prop_assert_eq!(photocurrent_ua(metal, wavelength, intensity, 0.5, voltage), 0.0);
    }
}
