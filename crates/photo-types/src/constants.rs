// ─────────────────────────────────────────────────────────────────────
// SCPN Photoemission Lab — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Planck constant (eV·s).
/// NOTE: the model works in electronvolts throughout, so h is carried in
/// eV·s rather than J·s. Work functions are tabulated in eV.
pub const H_PLANCK_EV_S: f64 = 4.136e-15;

/// Speed of light (m/s).
pub const C_LIGHT: f64 = 3.0e8;

/// Elementary charge (C)
pub const Q_ELECTRON: f64 = 1.602e-19;

/// Nanometre to metre conversion.
pub const NM_TO_M: f64 = 1.0e-9;

/// Metre to nanometre conversion.
pub const M_TO_NM: f64 = 1.0e9;
