// ─────────────────────────────────────────────────────────────────────
// SCPN Photoemission Lab — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::Serialize;

use crate::catalog::{self, Metal};
use crate::error::{PhotoError, PhotoResult};

/// Snapshot of the experiment controls. Mutated only by the session
/// driver; model functions read it immutably.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentParameters {
    /// Index into [`catalog::METALS`].
    pub metal_index: usize,
    /// Illuminated cathode area (cm²).
    pub area_cm2: f64,
    /// Source wavelength (nm).
    pub wavelength_nm: f64,
    /// Source intensity (W/m²).
    pub intensity: f64,
    /// Collector voltage (V). Negative values accelerate, positive
    /// values retard the photoelectrons.
    pub voltage: f64,
}

impl ExperimentParameters {
    /// Resolve the selected cathode material.
    pub fn metal(&self) -> PhotoResult<&'static Metal> {
        catalog::metal(self.metal_index)
            .ok_or(PhotoError::UnknownMetal(self.metal_index, catalog::METALS.len()))
    }
}

/// One averaged measurement at a given collector voltage.
/// Immutable once stored in the log.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub voltage: f64,
    pub average_current_ua: f64,
    /// The individual noisy ammeter readings behind the average.
    pub readings: Vec<f64>,
}

/// Display quantities derived from the metal/wavelength pair alone.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DerivedQuantities {
    /// Longest wavelength that still ejects electrons (nm).
    pub threshold_wavelength_nm: f64,
    /// Photon energy at the current wavelength (eV).
    pub photon_energy_ev: f64,
    /// Theoretical stopping potential (V).
    pub stopping_potential_v: f64,
}
