// ─────────────────────────────────────────────────────────────────────
// SCPN Photoemission Lab — Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! CSV report for the measurement table.
//!
//! A parameter header block, one row per measurement with the raw
//! readings, and the observed stopping potential when the sweep reached
//! it. The observed value is an empirical statistic read off noisy
//! data; it is labeled as such and kept distinct from the theoretical
//! stopping potential of the emission model.

use std::path::Path;

use photo_types::error::{PhotoError, PhotoResult};
use photo_types::state::ExperimentParameters;

use crate::acquisition::MeasurementLog;

/// An average below this (µA) counts as "current has stopped".
pub const EMPIRICAL_CUTOFF_UA: f64 = 0.001;

/// First measurement the sweep drove below the cutoff, if any.
/// Entries are voltage-ascending, so this is the lowest such voltage.
pub fn empirical_stopping_potential(log: &MeasurementLog) -> Option<f64> {
    log.entries()
        .iter()
        .find(|m| m.average_current_ua < EMPIRICAL_CUTOFF_UA)
        .map(|m| m.voltage)
}

/// Render the full report. Errors with [`PhotoError::NoMeasurements`]
/// on an empty log; callers map that to their own notification.
pub fn render_csv(params: &ExperimentParameters, log: &MeasurementLog) -> PhotoResult<String> {
    if log.is_empty() {
        return Err(PhotoError::NoMeasurements);
    }
    let metal = params.metal()?;

    let mut csv = String::new();
    csv.push_str("Photoelectric Effect Experiment Data\n");
    csv.push_str(&format!("Material: {} ({})\n", metal.name, metal.symbol));
    csv.push_str(&format!("Work Function: {} eV\n", metal.work_function_ev));
    csv.push_str(&format!("Wavelength: {} nm\n", params.wavelength_nm));
    csv.push_str(&format!("Intensity: {} W/m²\n", params.intensity));
    csv.push_str(&format!("Area: {} cm²\n\n", params.area_cm2));

    let reading_columns = log
        .entries()
        .iter()
        .map(|m| m.readings.len())
        .max()
        .unwrap_or(0);
    csv.push_str("Voltage (V),Average Current (µA)");
    for i in 1..=reading_columns {
        csv.push_str(&format!(",Reading {i}"));
    }
    csv.push('\n');

    for measurement in log.entries() {
        csv.push_str(&format!(
            "{:.1},{:.3}",
            measurement.voltage, measurement.average_current_ua
        ));
        for reading in &measurement.readings {
            csv.push_str(&format!(",{reading:.3}"));
        }
        csv.push('\n');
    }

    if let Some(voltage) = empirical_stopping_potential(log) {
        csv.push_str(&format!("\nObserved Stopping Potential: {voltage:.2} V\n"));
    }

    Ok(csv)
}

/// Render and write to disk.
pub fn write_csv<P: AsRef<Path>>(
    path: P,
    params: &ExperimentParameters,
    log: &MeasurementLog,
) -> PhotoResult<()> {
    let csv = render_csv(params, log)?;
    std::fs::write(&path, csv)?;
    log::info!(
        "wrote {} measurement rows to {}",
        log.len(),
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ExperimentParameters {
        ExperimentParameters {
            metal_index: 0,
            area_cm2: 0.1,
            wavelength_nm: 400.0,
            intensity: 5.0,
            voltage: 0.0,
        }
    }

    fn filled_log() -> MeasurementLog {
        let mut log = MeasurementLog::new();
        log.record(0.0, vec![5.0; 10]);
        log.record(0.5, vec![2.0; 10]);
        log.record(1.0, vec![0.0; 10]);
        log
    }

    #[test]
    fn test_empty_log_is_an_error() {
        let log = MeasurementLog::new();
        assert!(matches!(
            render_csv(&params(), &log),
            Err(PhotoError::NoMeasurements)
        ));
    }

    #[test]
    fn test_header_block() {
        let csv = render_csv(&params(), &filled_log()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Photoelectric Effect Experiment Data");
        assert_eq!(lines[1], "Material: Sodium (Na)");
        assert_eq!(lines[2], "Work Function: 2.28 eV");
        assert_eq!(lines[3], "Wavelength: 400 nm");
        assert_eq!(lines[4], "Intensity: 5 W/m²");
        assert_eq!(lines[5], "Area: 0.1 cm²");
        assert_eq!(lines[6], "");
    }

    #[test]
    fn test_column_header_and_rows() {
        let csv = render_csv(&params(), &filled_log()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert!(lines[7].starts_with("Voltage (V),Average Current (µA),Reading 1,"));
        assert!(lines[7].ends_with("Reading 10"));
        assert!(lines[8].starts_with("0.0,5.000,5.000,"));
        assert!(lines[9].starts_with("0.5,2.000,"));
        assert!(lines[10].starts_with("1.0,0.000,"));
    }

    #[test]
    fn test_observed_stopping_potential_reported() {
        let csv = render_csv(&params(), &filled_log()).unwrap();
        assert!(csv.ends_with("Observed Stopping Potential: 1.00 V\n"));
    }

    #[test]
    fn test_no_observed_stopping_potential_line() {
        let mut log = MeasurementLog::new();
        log.record(0.0, vec![5.0; 10]);
        let csv = render_csv(&params(), &log).unwrap();
        assert!(!csv.contains("Observed Stopping Potential"));
    }

    #[test]
    fn test_empirical_vs_theoretical_distinction() {
        // The empirical value is the first measured voltage below the
        // cutoff, not the model's V_s ≈ 0.82 V.
        let log = filled_log();
        assert_eq!(empirical_stopping_potential(&log), Some(1.0));
    }

    #[test]
    fn test_write_csv_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.csv");
        write_csv(&path, &params(), &filled_log()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Photoelectric Effect Experiment Data"));
    }
}
