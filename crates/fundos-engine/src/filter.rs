//! Filter stage of the visible list

use fundos_core::models::{FilterState, Place, SortKey, UserPosition, VisitedSet};
use fundos_core::text::{contains_folded, fold};
use fundos_core::CatalogCollator;
use fundos_geo::{
    distance_between, estimate_drive_time_range_minutes, format_distance_km, format_drive_range,
};

use crate::models::VisiblePlace;
use crate::sort::sort_places;

/// Folded, trimmed search text; empty matches everything
pub(crate) fn search_needle(filter: &FilterState) -> String {
    fold(filter.search.trim())
}

/// The predicates shared by the list and both facets
pub(crate) fn passes_search_and_pending(
    place: &Place,
    visited: &VisitedSet,
    filter: &FilterState,
    needle: &str,
) -> bool {
    if filter.only_pending && visited.is_visited(&place.id) {
        return false;
    }
    contains_folded(&place.search_text(), needle)
}

/// Every predicate of the visible list
pub fn matches(place: &Place, visited: &VisitedSet, filter: &FilterState, needle: &str) -> bool {
    passes_search_and_pending(place, visited, filter, needle)
        && filter.type_passes(place.place_type)
        && filter.district_passes(&place.district)
}

/// Annotate a place with its distance and drive-time estimate
pub fn annotate(
    place: &Place,
    visited: &VisitedSet,
    position: Option<&UserPosition>,
) -> VisiblePlace {
    let distance_km = distance_between(position, place.coordinates.as_ref());
    let drive_time = estimate_drive_time_range_minutes(distance_km);

    VisiblePlace {
        place: place.clone(),
        visited: visited.is_visited(&place.id),
        distance_km,
        drive_time,
        distance_label: distance_km.and_then(format_distance_km),
        drive_time_label: drive_time.as_ref().map(format_drive_range),
    }
}

/// Compute the ordered list of places passing the filter
pub fn visible_places(
    places: &[Place],
    visited: &VisitedSet,
    filter: &FilterState,
    position: Option<&UserPosition>,
    sort: SortKey,
    collator: &CatalogCollator,
) -> Vec<VisiblePlace> {
    let needle = search_needle(filter);
    let mut visible: Vec<VisiblePlace> = places
        .iter()
        .filter(|p| matches(p, visited, filter, &needle))
        .map(|p| annotate(p, visited, position))
        .collect();

    sort_places(&mut visible, sort, collator);
    visible
}
