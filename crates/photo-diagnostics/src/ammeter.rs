// ─────────────────────────────────────────────────────────────────────
// SCPN Photoemission Lab — Ammeter
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Synthetic collection-current readout.
//!
//! Emulates a bench ammeter: repeated readings of the model current
//! with multiplicative Gaussian instrument noise, clamped to the
//! physical floor of zero.

use rand::Rng;
use std::f64::consts::PI;

/// Readings taken per measurement.
pub const READINGS_PER_MEASUREMENT: usize = 10;

/// Relative instrument noise σ/I.
pub const RELATIVE_NOISE: f64 = 0.05;

/// Synthetic ammeter. Generic over the uniform source so sessions can
/// run seeded and reproducible.
#[derive(Debug, Clone, Copy)]
pub struct Ammeter {
    pub readings_per_measurement: usize,
    pub relative_noise: f64,
}

impl Default for Ammeter {
    fn default() -> Self {
        Ammeter {
            readings_per_measurement: READINGS_PER_MEASUREMENT,
            relative_noise: RELATIVE_NOISE,
        }
    }
}

impl Ammeter {
    /// Read the instrument: independent Gaussian samples with
    /// mean = true current and σ = true current × relative noise,
    /// clamped to ≥ 0 (current cannot be negative).
    ///
    /// A true current of zero yields all-zero readings: σ collapses to
    /// zero with the mean.
    pub fn sample<R: Rng>(&self, rng: &mut R, true_current_ua: f64) -> Vec<f64> {
        let std_dev = true_current_ua * self.relative_noise;
        (0..self.readings_per_measurement)
            .map(|_| gaussian(rng, true_current_ua, std_dev).max(0.0))
            .collect()
    }
}

/// One draw from N(mean, std_dev²) via the Box–Muller transform.
///
/// Both uniforms are resampled while exactly zero: ln(0) is undefined.
fn gaussian<R: Rng>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let mut u = 0.0;
    while u == 0.0 {
        u = rng.gen::<f64>();
    }
    let mut v = 0.0;
    while v == 0.0 {
        v = rng.gen::<f64>();
    }
    let z = (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos();
    mean + z * std_dev
}
