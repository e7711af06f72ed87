//! Wire shape of a custom place, shared by the persisted blob and the sync feed

use fundos_core::error::Result;
use fundos_core::models::{Coordinates, Place, PlaceDraft, PlaceId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A custom place as stored or received from the remote feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// Derived from type, name and district when missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    pub district: String,

    #[serde(rename = "type")]
    pub place_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl PlaceRecord {
    /// Validate the record into a place.
    ///
    /// Coordinates are only taken when both halves are present.
    pub fn to_place(&self) -> Result<Place> {
        let draft = PlaceDraft {
            name: self.name.clone(),
            district: self.district.clone(),
            place_type: self.place_type.clone(),
            coordinates: match (self.lat, self.lon) {
                (Some(lat), Some(lon)) => Some(Coordinates { lat, lon }),
                _ => None,
            },
        };
        let mut place = draft.validate()?;

        if let Some(id) = self.id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
            place.id = PlaceId::from(id);
        }
        Ok(place)
    }
}

impl From<&Place> for PlaceRecord {
    fn from(place: &Place) -> Self {
        Self {
            id: Some(place.id.to_string()),
            name: place.name.clone(),
            district: place.district.clone(),
            place_type: place.place_type.label().to_string(),
            lat: place.coordinates.map(|c| c.lat),
            lon: place.coordinates.map(|c| c.lon),
        }
    }
}

/// Decode a JSON array of records, skipping entries with the wrong shape.
///
/// Anything other than an array yields no records.
pub fn records_from_value(value: Value) -> Vec<PlaceRecord> {
    let Value::Array(items) = value else {
        tracing::warn!("Expected a list of place records");
        return Vec::new();
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping malformed place record");
                None
            }
        })
        .collect()
}

/// Convert records to places, skipping the ones that fail validation
pub fn places_from_records(records: impl IntoIterator<Item = PlaceRecord>) -> Vec<Place> {
    records
        .into_iter()
        .filter_map(|record| match record.to_place() {
            Ok(place) => Some(place),
            Err(e) => {
                tracing::warn!(name = %record.name, error = %e, "Rejected place record");
                None
            }
        })
        .collect()
}
