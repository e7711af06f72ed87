//! Sort stage of the visible list
//!
//! Every string comparison goes through the catalog collator, and every key
//! breaks ties by name.

use fundos_core::models::SortKey;
use fundos_core::CatalogCollator;
use std::cmp::Ordering;

use crate::models::VisiblePlace;

/// Sort visible places in place by the requested key
pub fn sort_places(places: &mut [VisiblePlace], sort: SortKey, collator: &CatalogCollator) {
    let by_name =
        |a: &VisiblePlace, b: &VisiblePlace| collator.compare(&a.place.name, &b.place.name);

    match sort {
        SortKey::Name => places.sort_by(by_name),
        SortKey::District => places.sort_by(|a, b| {
            collator
                .compare(&a.place.district, &b.place.district)
                .then_with(|| by_name(a, b))
        }),
        SortKey::Distance => {
            places.sort_by(|a, b| compare_distance(a, b).then_with(|| by_name(a, b)))
        }
        SortKey::Type => places.sort_by(|a, b| {
            collator
                .compare(a.place.place_type.label(), b.place.place_type.label())
                .then_with(|| by_name(a, b))
        }),
    }
}

/// Unknown distances compare as infinitely far
fn compare_distance(a: &VisiblePlace, b: &VisiblePlace) -> Ordering {
    let key = |v: &VisiblePlace| v.distance_km.filter(|d| d.is_finite()).unwrap_or(f64::INFINITY);
    key(a).total_cmp(&key(b))
}
