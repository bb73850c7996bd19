// ─────────────────────────────────────────────────────────────────────
// SCPN Photoemission Lab — Metal Catalog
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cathode material catalog and spectral display colors.
//!
//! Both tables are fixed configuration data: the catalog is indexed by
//! the material selector, the spectral bands map a wavelength to the
//! display color of the beam.

/// A cathode material. Work functions in eV; `color` is the display
/// hint used by external presentation layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metal {
    pub name: &'static str,
    pub symbol: &'static str,
    /// Work function Φ (eV). Always positive by catalog construction.
    pub work_function_ev: f64,
    pub color: &'static str,
}

/// Fixed cathode catalog. Index 0 (sodium) is the reset default.
pub static METALS: [Metal; 7] = [
    Metal {
        name: "Sodium",
        symbol: "Na",
        work_function_ev: 2.28,
        color: "#fbbf24",
    },
    Metal {
        name: "Potassium",
        symbol: "K",
        work_function_ev: 2.3,
        color: "#a855f7",
    },
    Metal {
        name: "Cesium",
        symbol: "Cs",
        work_function_ev: 2.1,
        color: "#06b6d4",
    },
    Metal {
        name: "Copper",
        symbol: "Cu",
        work_function_ev: 4.7,
        color: "#f97316",
    },
    Metal {
        name: "Silver",
        symbol: "Ag",
        work_function_ev: 4.73,
        color: "#6b7280",
    },
    Metal {
        name: "Aluminum",
        symbol: "Al",
        work_function_ev: 4.08,
        color: "#60a5fa",
    },
    Metal {
        name: "Gold",
        symbol: "Au",
        work_function_ev: 5.1,
        color: "#fbbf24",
    },
];

/// Spectral display bands: wavelengths below the bound take the band
/// color, the last band catches everything above.
///
/// | band       | λ (nm)    | color   |
/// |------------|-----------|---------|
/// | UV/violet  | < 380     | #8b5cf6 |
/// | indigo     | 380–449   | #6366f1 |
/// | cyan       | 450–494   | #06b6d4 |
/// | green      | 495–569   | #10b981 |
/// | yellow     | 570–589   | #fbbf24 |
/// | orange     | 590–619   | #f97316 |
/// | red        | ≥ 620     | #ef4444 |
pub const SPECTRUM_BANDS: [(f64, &str); 6] = [
    (380.0, "#8b5cf6"),
    (450.0, "#6366f1"),
    (495.0, "#06b6d4"),
    (570.0, "#10b981"),
    (590.0, "#fbbf24"),
    (620.0, "#f97316"),
];

/// Color of the red tail (λ ≥ 620 nm).
pub const SPECTRUM_RED: &str = "#ef4444";

/// Display color for a wavelength. Total over all finite inputs.
pub fn wavelength_color(wavelength_nm: f64) -> &'static str {
    for &(upper, color) in SPECTRUM_BANDS.iter() {
        if wavelength_nm < upper {
            return color;
        }
    }
    SPECTRUM_RED
}

/// Catalog lookup with bounds checking.
pub fn metal(index: usize) -> Option<&'static Metal> {
    METALS.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_default() {
        assert_eq!(METALS.len(), 7);
        assert_eq!(METALS[0].symbol, "Na");
        assert!((METALS[0].work_function_ev - 2.28).abs() < 1e-12);
    }

    #[test]
    fn test_work_functions_positive() {
        for m in METALS.iter() {
            assert!(
                m.work_function_ev > 0.0,
                "{} has non-positive work function",
                m.symbol
            );
        }
    }

    #[test]
    fn test_spectrum_band_edges() {
        assert_eq!(wavelength_color(100.0), "#8b5cf6");
        assert_eq!(wavelength_color(379.9), "#8b5cf6");
        assert_eq!(wavelength_color(380.0), "#6366f1");
        assert_eq!(wavelength_color(450.0), "#06b6d4");
        assert_eq!(wavelength_color(495.0), "#10b981");
        assert_eq!(wavelength_color(570.0), "#fbbf24");
        assert_eq!(wavelength_color(590.0), "#f97316");
        assert_eq!(wavelength_color(620.0), SPECTRUM_RED);
        assert_eq!(wavelength_color(700.0), SPECTRUM_RED);
    }

    #[test]
    fn test_spectrum_bands_ascending() {
        for w in SPECTRUM_BANDS.windows(2) {
            assert!(w[0].0 < w[1].0);
        }
    }

    #[test]
    fn test_metal_lookup() {
        assert_eq!(metal(2).unwrap().symbol, "Cs");
        assert!(metal(7).is_none());
    }
}
