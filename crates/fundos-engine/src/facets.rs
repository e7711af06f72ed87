//! Facet Counter
//!
//! Each facet is counted against every active filter except its own, so a
//! chip shows what the user would get by toggling it. Types ignore the type
//! selection; districts ignore the district selection.

use fundos_core::models::{FilterState, Place, PlaceType, VisitedSet};
use fundos_core::CatalogCollator;
use std::collections::{BTreeMap, HashMap};

use crate::filter::{passes_search_and_pending, search_needle};
use crate::models::FacetCounts;

/// Count places per type and per district for the current filter state
pub fn compute_facets(
    places: &[Place],
    visited: &VisitedSet,
    filter: &FilterState,
    collator: &CatalogCollator,
) -> FacetCounts {
    let needle = search_needle(filter);
    let mut type_counts: BTreeMap<PlaceType, usize> =
        PlaceType::ALL.iter().map(|t| (*t, 0)).collect();
    let mut district_counts: HashMap<String, usize> = HashMap::new();

    for place in places
        .iter()
        .filter(|p| passes_search_and_pending(p, visited, filter, &needle))
    {
        if filter.district_passes(&place.district) {
            *type_counts.entry(place.place_type).or_insert(0) += 1;
        }
        if filter.type_passes(place.place_type) {
            *district_counts.entry(place.district.clone()).or_insert(0) += 1;
        }
    }

    let mut available_districts: Vec<String> = district_counts
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(district, _)| district.clone())
        .collect();
    collator.sort(&mut available_districts);

    FacetCounts { type_counts, district_counts, available_districts }
}

/// True when the selected districts are exactly the available ones.
///
/// With no available districts an empty selection counts as all selected.
pub fn all_districts_selected(filter: &FilterState, facets: &FacetCounts) -> bool {
    filter.selected_districts.len() == facets.available_districts.len()
        && facets
            .available_districts
            .iter()
            .all(|d| filter.selected_districts.contains(d))
}

/// Number of places the "all districts" chip stands for
pub fn select_all_total(facets: &FacetCounts) -> usize {
    facets.available_districts.iter().map(|d| facets.district_count(d)).sum()
}

/// Drop selected districts that are no longer available.
///
/// Returns whether the filter changed.
pub fn prune_stale_districts(filter: &mut FilterState, facets: &FacetCounts) -> bool {
    let before = filter.selected_districts.len();
    filter
        .selected_districts
        .retain(|d| facets.available_districts.iter().any(|a| a == d));

    let removed = before - filter.selected_districts.len();
    if removed > 0 {
        tracing::debug!(removed, "Pruned stale district selections");
    }
    removed > 0
}

/// Select every available district, or clear them when all are selected
pub fn toggle_all_districts(filter: &mut FilterState, facets: &FacetCounts) {
    if all_districts_selected(filter, facets) {
        filter.selected_districts.clear();
    } else {
        filter.selected_districts = facets.available_districts.iter().cloned().collect();
    }
}
