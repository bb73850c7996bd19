// ─────────────────────────────────────────────────────────────────────
// SCPN Photoemission Lab — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid parameter {name}: {message}")]
    InvalidParameter { name: String, message: String },

    #[error("Unknown metal index {0} (catalog has {1} entries)")]
    UnknownMetal(usize, usize),

    #[error("No measurements recorded")]
    NoMeasurements,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PhotoResult<T> = Result<T, PhotoError>;
