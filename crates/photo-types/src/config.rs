// ─────────────────────────────────────────────────────────────────────
// SCPN Photoemission Lab — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{PhotoError, PhotoResult};
use crate::state::ExperimentParameters;

/// Top-level lab configuration.
/// Maps 1:1 to lab_config.json at the workspace root. Every field has a
/// serde default so a partial file still loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabConfig {
    #[serde(default = "default_experiment_name")]
    pub experiment_name: String,
    #[serde(default)]
    pub defaults: ExperimentDefaults,
    #[serde(default)]
    pub limits: ControlLimits,
}

/// Reset values for the experiment controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentDefaults {
    /// Catalog index of the default cathode (0 = sodium).
    #[serde(default)]
    pub metal_index: usize,
    #[serde(default = "default_area")]
    pub area_cm2: f64,
    #[serde(default = "default_wavelength")]
    pub wavelength_nm: f64,
    #[serde(default = "default_intensity")]
    pub intensity: f64,
    #[serde(default)]
    pub voltage: f64,
}

/// Allowed range of one control. `step` is the slider grid the hosting
/// UI quantizes to; the session only clamps to [min, max].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ControlRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ControlRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        ControlRange { min, max, step }
    }

    /// Clamp a requested value into this range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    fn validate(&self, name: &str) -> PhotoResult<()> {
        if self.min > self.max {
            return Err(PhotoError::InvalidParameter {
                name: name.into(),
                message: format!("min {} exceeds max {}", self.min, self.max),
            });
        }
        if self.step <= 0.0 {
            return Err(PhotoError::InvalidParameter {
                name: name.into(),
                message: format!("step {} must be positive", self.step),
            });
        }
        Ok(())
    }
}

/// Ranges formerly imposed by the UI sliders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlLimits {
    #[serde(default = "default_area_range")]
    pub area_cm2: ControlRange,
    #[serde(default = "default_wavelength_range")]
    pub wavelength_nm: ControlRange,
    #[serde(default = "default_intensity_range")]
    pub intensity: ControlRange,
    #[serde(default = "default_voltage_range")]
    pub voltage: ControlRange,
}

fn default_experiment_name() -> String {
    "Photoelectric-Standard".to_string()
}
fn default_area() -> f64 {
    0.1
}
fn default_wavelength() -> f64 {
    400.0
}
fn default_intensity() -> f64 {
    5.0
}
fn default_area_range() -> ControlRange {
    ControlRange::new(0.01, 1.0, 0.01)
}
fn default_wavelength_range() -> ControlRange {
    ControlRange::new(100.0, 700.0, 1.0)
}
fn default_intensity_range() -> ControlRange {
    ControlRange::new(0.0, 10.0, 0.1)
}
fn default_voltage_range() -> ControlRange {
    ControlRange::new(-3.0, 3.0, 0.1)
}

impl Default for ExperimentDefaults {
    fn default() -> Self {
        ExperimentDefaults {
            metal_index: 0,
            area_cm2: default_area(),
            wavelength_nm: default_wavelength(),
            intensity: default_intensity(),
            voltage: 0.0,
        }
    }
}

impl Default for ControlLimits {
    fn default() -> Self {
        ControlLimits {
            area_cm2: default_area_range(),
            wavelength_nm: default_wavelength_range(),
            intensity: default_intensity_range(),
            voltage: default_voltage_range(),
        }
    }
}

impl Default for LabConfig {
    fn default() -> Self {
        LabConfig {
            experiment_name: default_experiment_name(),
            defaults: ExperimentDefaults::default(),
            limits: ControlLimits::default(),
        }
    }
}

impl LabConfig {
    /// Load from a JSON file and validate the ranges.
    pub fn from_file(path: &str) -> PhotoResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Range sanity plus catalog bounds for the default material.
    pub fn validate(&self) -> PhotoResult<()> {
        self.limits.area_cm2.validate("area_cm2")?;
        self.limits.wavelength_nm.validate("wavelength_nm")?;
        self.limits.intensity.validate("intensity")?;
        self.limits.voltage.validate("voltage")?;
        if crate::catalog::metal(self.defaults.metal_index).is_none() {
            return Err(PhotoError::ConfigError(format!(
                "default metal_index {} outside catalog",
                self.defaults.metal_index
            )));
        }
        if self.defaults.wavelength_nm <= 0.0 {
            return Err(PhotoError::ConfigError(format!(
                "default wavelength {} nm is not positive",
                self.defaults.wavelength_nm
            )));
        }
        Ok(())
    }

    /// Fresh parameter snapshot at the configured defaults.
    pub fn initial_parameters(&self) -> ExperimentParameters {
        ExperimentParameters {
            metal_index: self.defaults.metal_index,
            area_cm2: self.defaults.area_cm2,
            wavelength_nm: self.defaults.wavelength_nm,
            intensity: self.defaults.intensity,
            voltage: self.defaults.voltage,
        }
    }
}
