// ─────────────────────────────────────────────────────────────────────
// SCPN Photoemission Lab — Photo Diagnostics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Synthetic instrumentation modules.
//!
//! Noisy ammeter readout, measurement acquisition log, CSV report.

pub mod acquisition;
pub mod ammeter;
pub mod report;
