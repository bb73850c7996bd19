// ─────────────────────────────────────────────────────────────────────
// SCPN Photoemission Lab — Acquisition
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Measurement acquisition log.
//!
//! Ordered by voltage, de-duplicated within the voltage matching
//! window: revisiting a voltage replaces the stale entry instead of
//! appending a second row.

use photo_types::state::Measurement;

/// Two voltages closer than this are the same measurement point.
/// Half the 0.1 V control step, so only a revisited grid point matches.
pub const VOLTAGE_MATCH_TOLERANCE_V: f64 = 0.05;

/// The accumulated measurement table for one experiment run.
#[derive(Debug, Clone, Default)]
pub struct MeasurementLog {
    entries: Vec<Measurement>,
}

impl MeasurementLog {
    pub fn new() -> Self {
        MeasurementLog::default()
    }

    /// Record a measurement from raw ammeter readings.
    ///
    /// The average is the arithmetic mean. An existing entry within the
    /// matching window is replaced in place, preserving the order of
    /// the rest of the table; a new voltage is inserted at its
    /// ascending position.
    pub fn record(&mut self, voltage: f64, readings: Vec<f64>) -> &Measurement {
        let average_current_ua = if readings.is_empty() {
            0.0
        } else {
            readings.iter().sum::<f64>() / readings.len() as f64
        };
        let measurement = Measurement {
            voltage,
            average_current_ua,
            readings,
        };

        let existing = self
            .entries
            .iter()
            .position(|m| (m.voltage - voltage).abs() < VOLTAGE_MATCH_TOLERANCE_V);

        match existing {
            Some(index) => {
                self.entries[index] = measurement;
                &self.entries[index]
            }
            None => {
                let index = self.entries.partition_point(|m| m.voltage < voltage);
                self.entries.insert(index, measurement);
                &self.entries[index]
            }
        }
    }

    /// Drop all entries (experiment reset).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Measurement] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (voltage, average current) pairs for charting.
    pub fn curve(&self) -> Vec<(f64, f64)> {
        self.entries
            .iter()
            .map(|m| (m.voltage, m.average_current_ua))
            .collect()
    }
}
