use fundos_core::models::{Place, PlaceType, Progress, SortKey};
use fundos_geo::DriveTimeRange;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A place that passed the active filters, annotated for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisiblePlace {
    pub place: Place,

    pub visited: bool,

    /// Straight-line distance from the user, when both ends are known
    pub distance_km: Option<f64>,

    pub drive_time: Option<DriveTimeRange>,

    /// e.g. "850 m" or "12.3 km"
    pub distance_label: Option<String>,

    /// e.g. "13 min–22 min"
    pub drive_time_label: Option<String>,
}

/// Per-facet counts for the chips
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCounts {
    /// Every type is present, with zero when nothing matches
    pub type_counts: BTreeMap<PlaceType, usize>,

    pub district_counts: HashMap<String, usize>,

    /// Districts with a non-zero count, in collation order
    pub available_districts: Vec<String>,
}

impl FacetCounts {
    pub fn type_count(&self, place_type: PlaceType) -> usize {
        self.type_counts.get(&place_type).copied().unwrap_or(0)
    }

    pub fn district_count(&self, district: &str) -> usize {
        self.district_counts.get(district).copied().unwrap_or(0)
    }
}

/// Everything a renderer needs, computed from a single snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub places: Vec<VisiblePlace>,

    pub facets: FacetCounts,

    /// The district chips are only offered once a type is selected
    pub district_facet_visible: bool,

    /// Every available district is selected
    pub all_districts_selected: bool,

    /// Places covered by the "all districts" chip
    pub select_all_total: usize,

    pub progress: Progress,

    pub sort: SortKey,

    /// Stale district selections were dropped; the filter needs saving
    pub filter_changed: bool,
}
