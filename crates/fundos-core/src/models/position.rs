use crate::error::{FundosError, Result};
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees (WGS 84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Where the user currently is; same shape as a place's coordinates.
pub type UserPosition = Coordinates;

impl Coordinates {
    /// Create coordinates, rejecting values outside [-90, 90] / [-180, 180]
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        let coords = Self { lat, lon };
        if coords.is_valid() {
            Ok(coords)
        } else {
            Err(FundosError::InvalidCoordinates { lat, lon })
        }
    }

    /// Check that both values are finite and within range
    pub fn is_valid(&self) -> bool {
        is_valid_lat_lon(self.lat, self.lon)
    }
}

pub fn is_valid_lat_lon(lat: f64, lon: f64) -> bool {
    lat.is_finite()
        && lon.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lon)
}
