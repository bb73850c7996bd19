// ─────────────────────────────────────────────────────────────────────
// SCPN Photoemission Lab — Session
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One experiment run, owned by the hosting environment and driven
//! from a single control thread.
//!
//! The session is a two-state machine. Idle (light off): control
//! changes only mutate the parameter snapshot. Active (light on):
//! switching the light on, and every voltage change while it is on,
//! takes one measurement with the current snapshot. Switching off
//! retains the log; reset clears it and restores the configured
//! defaults.

use rand::rngs::ThreadRng;
use rand::Rng;
use std::path::Path;

use photo_core::emission;
use photo_diagnostics::acquisition::MeasurementLog;
use photo_diagnostics::ammeter::Ammeter;
use photo_diagnostics::report;
use photo_types::catalog;
use photo_types::config::LabConfig;
use photo_types::error::{PhotoError, PhotoResult};
use photo_types::state::{DerivedQuantities, ExperimentParameters};

/// Experiment session state. Generic over the uniform source: tests
/// inject a seeded `StdRng` for reproducible runs.
pub struct ExperimentSession<R: Rng> {
    config: LabConfig,
    params: ExperimentParameters,
    ammeter: Ammeter,
    log: MeasurementLog,
    light_on: bool,
    rng: R,
}

impl ExperimentSession<ThreadRng> {
    /// Session with the thread-local generator.
    pub fn new(config: LabConfig) -> PhotoResult<Self> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> ExperimentSession<R> {
    pub fn with_rng(config: LabConfig, rng: R) -> PhotoResult<Self> {
        config.validate()?;
        let params = config.initial_parameters();
        Ok(ExperimentSession {
            config,
            params,
            ammeter: Ammeter::default(),
            log: MeasurementLog::new(),
            light_on: false,
            rng,
        })
    }

    pub fn params(&self) -> &ExperimentParameters {
        &self.params
    }

    pub fn log(&self) -> &MeasurementLog {
        &self.log
    }

    pub fn is_light_on(&self) -> bool {
        self.light_on
    }

    /// Display quantities for the current metal/wavelength pair.
    pub fn derived(&self) -> PhotoResult<DerivedQuantities> {
        Ok(emission::derived(self.params.metal()?, self.params.wavelength_nm))
    }

    /// Select a cathode from the catalog. Does not trigger a
    /// measurement.
    pub fn select_metal(&mut self, index: usize) -> PhotoResult<()> {
        if catalog::metal(index).is_none() {
            return Err(PhotoError::UnknownMetal(index, catalog::METALS.len()));
        }
        self.params.metal_index = index;
        Ok(())
    }

    /// Clamped to the configured limits; returns the applied value.
    pub fn set_area_cm2(&mut self, area_cm2: f64) -> f64 {
        self.params.area_cm2 = self.config.limits.area_cm2.clamp(area_cm2);
        self.params.area_cm2
    }

    /// Clamped to the configured limits; returns the applied value.
    pub fn set_wavelength_nm(&mut self, wavelength_nm: f64) -> f64 {
        self.params.wavelength_nm = self.config.limits.wavelength_nm.clamp(wavelength_nm);
        self.params.wavelength_nm
    }

    /// Clamped to the configured limits; returns the applied value.
    pub fn set_intensity(&mut self, intensity: f64) -> f64 {
        self.params.intensity = self.config.limits.intensity.clamp(intensity);
        self.params.intensity
    }

    /// Move the collector voltage. While the light is on every change
    /// takes one measurement at the new setting.
    pub fn set_voltage(&mut self, voltage: f64) -> PhotoResult<f64> {
        self.params.voltage = self.config.limits.voltage.clamp(voltage);
        if self.light_on {
            self.take_measurement()?;
        }
        Ok(self.params.voltage)
    }

    /// Toggle the light source. Switching on takes the first
    /// measurement; switching off retains the log. Returns the new
    /// state.
    pub fn toggle_light(&mut self) -> PhotoResult<bool> {
        self.light_on = !self.light_on;
        log::info!("light {}", if self.light_on { "on" } else { "off" });
        if self.light_on {
            self.take_measurement()?;
        }
        Ok(self.light_on)
    }

    /// Model current → noisy readings → log. Returns the averaged
    /// current.
    pub fn take_measurement(&mut self) -> PhotoResult<f64> {
        let metal = self.params.metal()?;
        let true_current = emission::photocurrent_ua(
            metal,
            self.params.wavelength_nm,
            self.params.intensity,
            self.params.area_cm2,
            self.params.voltage,
        );
        let readings = self.ammeter.sample(&mut self.rng, true_current);
        let measurement = self.log.record(self.params.voltage, readings);
        let average_current_ua = measurement.average_current_ua;
        let voltage = measurement.voltage;
        log::debug!(
            "measured {:.3} µA at {:.1} V ({} points logged)",
            average_current_ua,
            voltage,
            self.log.len()
        );
        Ok(average_current_ua)
    }

    /// Back to the configured defaults: log cleared, light off.
    pub fn reset(&mut self) {
        self.params = self.config.initial_parameters();
        self.log.clear();
        self.light_on = false;
        log::info!("experiment reset");
    }

    /// CSV report of the current log.
    pub fn export_csv(&self) -> PhotoResult<String> {
        report::render_csv(&self.params, &self.log)
    }

    /// CSV report written to disk.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> PhotoResult<()> {
        report::write_csv(path, &self.params, &self.log)
    }
}
