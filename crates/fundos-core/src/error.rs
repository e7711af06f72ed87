//! Error types for Fundos

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FundosError {
    // Place errors
    #[error("Invalid place: {field} {reason}")]
    InvalidPlace { field: String, reason: String },

    #[error("Coordinates out of range: lat {lat}, lon {lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },

    #[error("Place not found: {id}")]
    PlaceNotFound { id: String },

    // Collation errors
    #[error("Unsupported collation locale '{locale}': {reason}")]
    Locale { locale: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FundosError {
    fn from(err: serde_json::Error) -> Self {
        FundosError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FundosError>;
