use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::PlaceType;
use crate::error::{FundosError, Result};

/// Active search and facet selections.
///
/// An empty `selected_types` or `selected_districts` means "no restriction"
/// on that axis, never "nothing matches".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub only_pending: bool,
    pub selected_types: BTreeSet<PlaceType>,
    pub selected_districts: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_only_pending(mut self, only_pending: bool) -> Self {
        self.only_pending = only_pending;
        self
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = PlaceType>) -> Self {
        self.selected_types = types.into_iter().collect();
        self
    }

    pub fn with_districts(
        mut self,
        districts: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.selected_districts = districts.into_iter().map(Into::into).collect();
        self
    }

    /// Add the type if absent, remove it otherwise
    pub fn toggle_type(&mut self, place_type: PlaceType) {
        if !self.selected_types.remove(&place_type) {
            self.selected_types.insert(place_type);
        }
    }

    /// Add the district if absent, remove it otherwise
    pub fn toggle_district(&mut self, district: &str) {
        if !self.selected_districts.remove(district) {
            self.selected_districts.insert(district.to_string());
        }
    }

    /// Drop both facet selections; search and only-pending are kept
    pub fn clear_selections(&mut self) {
        self.selected_types.clear();
        self.selected_districts.clear();
    }

    pub fn type_passes(&self, place_type: PlaceType) -> bool {
        self.selected_types.is_empty() || self.selected_types.contains(&place_type)
    }

    pub fn district_passes(&self, district: &str) -> bool {
        self.selected_districts.is_empty() || self.selected_districts.contains(district)
    }
}

/// Ordering requested for the visible list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Type, then name
    #[default]
    Type,
    Name,
    /// District, then name
    District,
    /// Ascending distance, unknown last, then name
    Distance,
}

impl SortKey {
    /// Parse a sort key, falling back to type ordering for anything unknown
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Type => "type",
            SortKey::Name => "name",
            SortKey::District => "district",
            SortKey::Distance => "distance",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = FundosError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "type" => Ok(SortKey::Type),
            "name" => Ok(SortKey::Name),
            "district" => Ok(SortKey::District),
            "distance" => Ok(SortKey::Distance),
            other => Err(FundosError::ConfigInvalid {
                key: "sort".to_string(),
                reason: format!(
                    "Unknown sort key: {}. Use type, name, district, or distance",
                    other
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles() {
        let mut filter = FilterState::new();
        filter.toggle_type(PlaceType::Park);
        filter.toggle_district("Surco");
        assert!(filter.selected_types.contains(&PlaceType::Park));
        assert!(filter.selected_districts.contains("Surco"));

        filter.toggle_type(PlaceType::Park);
        filter.toggle_district("Surco");
        assert!(filter.selected_types.is_empty());
        assert!(filter.selected_districts.is_empty());
    }

    #[test]
    fn test_empty_selection_restricts_nothing() {
        let filter = FilterState::new();
        assert!(filter.type_passes(PlaceType::Estate));
        assert!(filter.district_passes("Huaral"));

        let filter = FilterState::new().with_types([PlaceType::Park]).with_districts(["Surco"]);
        assert!(!filter.type_passes(PlaceType::Estate));
        assert!(!filter.district_passes("Huaral"));
    }

    #[test]
    fn test_unknown_sort_key_falls_back_to_type() {
        assert_eq!(SortKey::parse_lenient("distance"), SortKey::Distance);
        assert_eq!(SortKey::parse_lenient("popularity"), SortKey::Type);
        assert_eq!(SortKey::parse_lenient(""), SortKey::Type);
    }
}
