use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Coordinates;
use crate::error::{FundosError, Result};
use crate::text::slugify;

/// Kind of place in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlaceType {
    #[serde(rename = "Parque", alias = "Park")]
    Park,
    #[serde(rename = "Fundo", alias = "Estate")]
    Estate,
}

impl PlaceType {
    /// Every type, in chip display order
    pub const ALL: [PlaceType; 2] = [PlaceType::Park, PlaceType::Estate];

    /// Label in the catalog's language; used for search and type ordering
    pub fn label(&self) -> &'static str {
        match self {
            PlaceType::Park => "Parque",
            PlaceType::Estate => "Fundo",
        }
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlaceType {
    type Err = FundosError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "parque" | "park" => Ok(PlaceType::Park),
            "fundo" | "estate" => Ok(PlaceType::Estate),
            other => Err(FundosError::InvalidPlace {
                field: "type".to_string(),
                reason: format!("must be Parque or Fundo, got '{}'", other),
            }),
        }
    }
}

/// Stable slug identifying a place
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(pub String);

impl PlaceId {
    /// Derive the id from the descriptive fields.
    ///
    /// Same (type, name, district) always yields the same id.
    pub fn derive(place_type: PlaceType, name: &str, district: &str) -> Self {
        PlaceId(slugify(&format!("{} {} {}", place_type.label(), name, district)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlaceId {
    fn from(s: &str) -> Self {
        PlaceId(s.to_string())
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,

    pub name: String,

    /// Administrative area; free text grouping key
    pub district: String,

    #[serde(rename = "type")]
    pub place_type: PlaceType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl Place {
    /// Create a place with a derived id
    pub fn new(
        place_type: PlaceType,
        name: impl Into<String>,
        district: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let district = district.into();
        Self {
            id: PlaceId::derive(place_type, &name, &district),
            name,
            district,
            place_type,
            coordinates: None,
        }
    }

    pub fn with_coordinates(mut self, lat: f64, lon: f64) -> Self {
        self.coordinates = Some(Coordinates { lat, lon });
        self
    }

    /// Text the search box is matched against
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.district, self.place_type.label())
    }
}

/// Unvalidated user submission for a new place
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceDraft {
    pub name: String,
    pub district: String,
    pub place_type: String,
    pub coordinates: Option<Coordinates>,
}

impl PlaceDraft {
    /// Validate the submission and turn it into a place.
    ///
    /// Name and district must be non-blank, the type must be one of the known
    /// kinds and coordinates, when given, must be in range.
    pub fn validate(&self) -> Result<Place> {
        let name = required("name", &self.name)?;
        let district = required("district", &self.district)?;
        let place_type: PlaceType = self.place_type.parse()?;

        let mut place = Place::new(place_type, name, district);
        if let Some(coords) = self.coordinates {
            place.coordinates = Some(Coordinates::new(coords.lat, coords.lon)?);
        }
        Ok(place)
    }
}

fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FundosError::InvalidPlace {
            field: field.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_derivation_is_deterministic() {
        let a = PlaceId::derive(PlaceType::Estate, "San Vicente", "Lurín");
        let b = PlaceId::derive(PlaceType::Estate, "San  Vicente", "LURIN");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "fundo-san-vicente-lurin");
    }

    #[test]
    fn test_type_parsing_accepts_both_languages() {
        assert_eq!("Parque".parse::<PlaceType>().unwrap(), PlaceType::Park);
        assert_eq!(" estate ".parse::<PlaceType>().unwrap(), PlaceType::Estate);
        assert!("Playa".parse::<PlaceType>().is_err());
    }

    #[test]
    fn test_place_serializes_with_catalog_labels() {
        let place = Place::new(PlaceType::Park, "Parque Salazar", "Miraflores");
        let json = serde_json::to_value(&place).unwrap();
        assert_eq!(json["type"], "Parque");
        assert!(json.get("coordinates").is_none());

        let back: Place = serde_json::from_value(serde_json::json!({
            "id": "x", "name": "n", "district": "d", "type": "Estate"
        }))
        .unwrap();
        assert_eq!(back.place_type, PlaceType::Estate);
    }

    #[test]
    fn test_draft_validation() {
        let ok = PlaceDraft {
            name: "  Rumipama ".to_string(),
            district: "Cieneguilla".to_string(),
            place_type: "fundo".to_string(),
            coordinates: Some(Coordinates { lat: -12.11, lon: -76.83 }),
        }
        .validate()
        .unwrap();
        assert_eq!(ok.name, "Rumipama");
        assert_eq!(ok.id.as_str(), "fundo-rumipama-cieneguilla");

        let blank = PlaceDraft {
            name: " ".into(),
            district: "x".into(),
            place_type: "parque".into(),
            coordinates: None,
        };
        assert!(matches!(
            blank.validate(),
            Err(FundosError::InvalidPlace { ref field, .. }) if field == "name"
        ));

        let bad_type = PlaceDraft {
            name: "a".into(),
            district: "b".into(),
            place_type: "zoo".into(),
            coordinates: None,
        };
        assert!(bad_type.validate().is_err());

        let bad_coords = PlaceDraft {
            name: "a".into(),
            district: "b".into(),
            place_type: "parque".into(),
            coordinates: Some(Coordinates { lat: 120.0, lon: 0.0 }),
        };
        assert!(matches!(bad_coords.validate(), Err(FundosError::InvalidCoordinates { .. })));
    }
}
