// ─────────────────────────────────────────────────────────────────────
// SCPN Photoemission Lab — Emission
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Photoemission physics: Einstein relation and the linear I–V model.
//!
//! Calculates photon energy, stopping potential and the collection
//! current as a function of the experiment controls.

use ndarray::Array1;

use photo_types::catalog::Metal;
use photo_types::constants::{C_LIGHT, H_PLANCK_EV_S, M_TO_NM, NM_TO_M};
use photo_types::state::DerivedQuantities;

/// Linear scale tying current (µA) to intensity × area.
const CURRENT_SCALE: f64 = 10.0;

/// Longest wavelength that still ejects electrons, in metres.
///
///   λ_th = hc / Φ
///
/// Total: the catalog guarantees Φ > 0.
pub fn threshold_wavelength_m(metal: &Metal) -> f64 {
    H_PLANCK_EV_S * C_LIGHT / metal.work_function_ev
}

/// Photon energy in eV for a wavelength in nm.
///
///   E = hc / λ
///
/// Caller contract: λ > 0 (the config limits constrain the control to
/// 100–700 nm).
pub fn photon_energy_ev(wavelength_nm: f64) -> f64 {
    H_PLANCK_EV_S * C_LIGHT / (wavelength_nm * NM_TO_M)
}

/// Theoretical stopping potential in volts.
///
///   V_s = max(0, E − Φ)
///
/// Zero at or below the threshold frequency: photons without enough
/// energy eject no electrons, so there is nothing to stop.
pub fn stopping_potential_v(metal: &Metal, wavelength_nm: f64) -> f64 {
    (photon_energy_ev(wavelength_nm) - metal.work_function_ev).max(0.0)
}

/// Collection current in µA.
///
/// Algorithm:
/// 1. E ≤ Φ → 0 (below threshold, regardless of intensity)
/// 2. V ≥ V_s → 0 (retarding field fully suppresses collection)
/// 3. base = intensity × area × 10
///    factor = max(0, 1 + V / V_s)
///    I = base × factor
///
/// This is a simplified linear I–V model, kept exactly as calibrated
/// for output compatibility with recorded datasets.
pub fn photocurrent_ua(
    metal: &Metal,
    wavelength_nm: f64,
    intensity: f64,
    area_cm2: f64,
    voltage: f64,
) -> f64 {
    let photon_energy = photon_energy_ev(wavelength_nm);
    if photon_energy <= metal.work_function_ev {
        return 0.0;
    }

    // Above threshold the stopping potential is strictly positive.
    let stopping_potential = photon_energy - metal.work_function_ev;
    if voltage >= stopping_potential {
        return 0.0;
    }

    let base = intensity * area_cm2 * CURRENT_SCALE;
    let factor = (1.0 + voltage / stopping_potential).max(0.0);
    base * factor
}

/// Display quantities for the current metal/wavelength pair.
pub fn derived(metal: &Metal, wavelength_nm: f64) -> DerivedQuantities {
    DerivedQuantities {
        threshold_wavelength_nm: threshold_wavelength_m(metal) * M_TO_NM,
        photon_energy_ev: photon_energy_ev(wavelength_nm),
        stopping_potential_v: stopping_potential_v(metal, wavelength_nm),
    }
}

/// Model I–V curve sampled on a voltage linspace.
/// Returns (voltages, currents), each of length `n`. Intended for
/// charting consumers that overlay the model on measured points.
pub fn iv_curve(
    metal: &Metal,
    wavelength_nm: f64,
    intensity: f64,
    area_cm2: f64,
    v_min: f64,
    v_max: f64,
    n: usize,
) -> (Array1<f64>, Array1<f64>) {
    let voltages = Array1::linspace(v_min, v_max, n);
    let currents = voltages.mapv(|v| photocurrent_ua(metal, wavelength_nm, intensity, area_cm2, v));
    (voltages, currents)
}
