//! Session controller
//!
//! A [`Session`] owns all mutable state of one user session. Every mutation
//! only changes that state; [`Session::recompute`] then derives the full view
//! from a single snapshot. There is no incremental update path.

use fundos_core::models::{
    FilterState, Place, PlaceDraft, PlaceId, PlaceType, SortKey, UserPosition, VisitedSet,
};
use fundos_core::repository::UpsertOutcome;
use fundos_core::{CatalogCollator, FundosError, PlaceRepository, Result};
use std::fmt::Display;

use crate::facets::{self, compute_facets};
use crate::filter::visible_places;
use crate::models::{FacetCounts, View};

#[derive(Debug)]
pub struct Session {
    repository: PlaceRepository,
    visited: VisitedSet,
    filter: FilterState,
    position: Option<UserPosition>,
    sort: SortKey,
    collator: CatalogCollator,
}

impl Session {
    /// Start a session over a repository with empty state
    pub fn new(repository: PlaceRepository, collator: CatalogCollator) -> Self {
        Self {
            repository,
            visited: VisitedSet::new(),
            filter: FilterState::new(),
            position: None,
            sort: SortKey::default(),
            collator,
        }
    }

    pub fn with_visited(mut self, visited: VisitedSet) -> Self {
        self.visited = visited;
        self
    }

    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_position(mut self, position: Option<UserPosition>) -> Self {
        self.position = position;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn repository(&self) -> &PlaceRepository {
        &self.repository
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn position(&self) -> Option<&UserPosition> {
        self.position.as_ref()
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn collator(&self) -> &CatalogCollator {
        &self.collator
    }

    /// Compute the whole view from the current state.
    ///
    /// Selected districts that are no longer available are dropped first;
    /// `View::filter_changed` tells the caller to persist the filter.
    pub fn recompute(&mut self) -> View {
        let places = self.repository.all_places();

        let mut facets = self.facets_for(&places);
        let filter_changed = facets::prune_stale_districts(&mut self.filter, &facets);
        if filter_changed {
            // type counts depend on the district selection
            facets = self.facets_for(&places);
        }

        let visible = visible_places(
            &places,
            &self.visited,
            &self.filter,
            self.position.as_ref(),
            self.sort,
            &self.collator,
        );

        tracing::debug!(
            total = places.len(),
            visible = visible.len(),
            sort = %self.sort,
            filter_changed,
            "Recomputed view"
        );

        View {
            places: visible,
            district_facet_visible: !self.filter.selected_types.is_empty(),
            all_districts_selected: facets::all_districts_selected(&self.filter, &facets),
            select_all_total: facets::select_all_total(&facets),
            progress: self.visited.progress(&places),
            sort: self.sort,
            facets,
            filter_changed,
        }
    }

    fn facets_for(&self, places: &[Place]) -> FacetCounts {
        compute_facets(places, &self.visited, &self.filter, &self.collator)
    }

    pub fn toggle_type(&mut self, place_type: PlaceType) {
        self.filter.toggle_type(place_type);
        tracing::info!(%place_type, "Toggled type filter");
    }

    pub fn toggle_district(&mut self, district: &str) {
        self.filter.toggle_district(district);
        tracing::info!(district, "Toggled district filter");
    }

    /// Select every available district, or clear them when all are selected
    pub fn toggle_all_districts(&mut self) {
        let places = self.repository.all_places();
        let facets = self.facets_for(&places);
        facets::toggle_all_districts(&mut self.filter, &facets);
        tracing::info!(selected = self.filter.selected_districts.len(), "Toggled all districts");
    }

    /// Clear type and district selections
    pub fn clear_filters(&mut self) {
        self.filter.clear_selections();
        tracing::info!("Cleared filters");
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_only_pending(&mut self, only_pending: bool) {
        self.filter.only_pending = only_pending;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Mark a place visited or pending
    pub fn set_visited(&mut self, id: &PlaceId, visited: bool) -> Result<()> {
        if self.repository.get(id).is_none() {
            return Err(FundosError::PlaceNotFound { id: id.to_string() });
        }
        self.visited.set(id.clone(), visited);
        tracing::info!(%id, visited, "Updated visited flag");
        Ok(())
    }

    /// Validate a user submission and add it to the repository
    pub fn submit_place(&mut self, draft: &PlaceDraft) -> Result<Place> {
        let place = draft.validate()?;
        let outcome = self.repository.upsert(place.clone());
        if outcome == UpsertOutcome::Replaced {
            tracing::info!(id = %place.id, "Submission replaced an existing place");
        } else {
            tracing::info!(id = %place.id, "Added place");
        }
        Ok(place)
    }

    /// Replace all custom places with an authoritative snapshot
    pub fn apply_snapshot(&mut self, places: impl IntoIterator<Item = Place>) {
        self.repository.replace_all(places);
        tracing::info!(custom = self.repository.custom_places().len(), "Applied place snapshot");
    }

    /// Consume a geolocation result.
    ///
    /// On success the position is stored and the list switches to distance
    /// ordering. On failure, or for out-of-range coordinates, the previous
    /// position is kept. Returns whether the position was updated.
    pub fn apply_geolocation<E: Display>(
        &mut self,
        result: std::result::Result<UserPosition, E>,
    ) -> bool {
        match result {
            Ok(position) if position.is_valid() => {
                self.position = Some(position);
                self.sort = SortKey::Distance;
                tracing::info!(lat = position.lat, lon = position.lon, "Updated user position");
                true
            }
            Ok(position) => {
                tracing::warn!(
                    lat = position.lat,
                    lon = position.lon,
                    "Ignoring out-of-range position"
                );
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "Geolocation failed; keeping previous position");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundos_core::models::Coordinates;

    fn session() -> Session {
        Session::new(PlaceRepository::with_base_catalog(), CatalogCollator::spanish().unwrap())
    }

    #[test]
    fn test_recompute_prunes_stale_districts() {
        let mut session = session().with_filter(
            FilterState::new()
                .with_types([PlaceType::Estate])
                .with_districts(["Huaral", "Miraflores"]),
        );

        let view = session.recompute();
        assert!(view.filter_changed);
        assert_eq!(session.filter().selected_districts.len(), 1);
        assert!(session.filter().selected_districts.contains("Huaral"));
        // type counts follow the pruned selection
        assert_eq!(view.facets.type_count(PlaceType::Park), 0);
        assert_eq!(view.facets.type_count(PlaceType::Estate), 1);

        assert!(!session.recompute().filter_changed);
    }

    #[test]
    fn test_district_facet_hidden_without_types() {
        let mut session = session();
        assert!(!session.recompute().district_facet_visible);
        session.toggle_type(PlaceType::Park);
        assert!(session.recompute().district_facet_visible);
    }

    #[test]
    fn test_toggle_all_districts_round_trip() {
        let mut session = session();
        session.toggle_type(PlaceType::Estate);
        session.toggle_all_districts();

        let view = session.recompute();
        assert!(view.all_districts_selected);
        assert_eq!(view.select_all_total, 6);
        assert_eq!(view.places.len(), 6);

        session.toggle_all_districts();
        assert!(session.filter().selected_districts.is_empty());
        assert!(!session.recompute().all_districts_selected);
    }

    #[test]
    fn test_set_visited_requires_known_place() {
        let mut session = session();
        let unknown = PlaceId::from("parque-inexistente-lima");
        assert!(matches!(
            session.set_visited(&unknown, true),
            Err(FundosError::PlaceNotFound { .. })
        ));

        let known = PlaceId::derive(PlaceType::Park, "Parque Salazar", "Miraflores");
        session.set_visited(&known, true).unwrap();
        let view = session.recompute();
        assert_eq!(view.progress.visited, 1);
        assert_eq!(view.progress.total, 26);
        assert_eq!(view.progress.percent, 4);
    }

    #[test]
    fn test_submit_place_rejects_invalid_draft() {
        let mut session = session();
        let draft = PlaceDraft {
            name: "".into(),
            district: "Surco".into(),
            place_type: "parque".into(),
            coordinates: None,
        };
        assert!(session.submit_place(&draft).is_err());
        assert_eq!(session.repository().len(), 26);

        let draft = PlaceDraft {
            name: "Huerto".into(),
            district: "Pachacámac".into(),
            place_type: "fundo".into(),
            coordinates: None,
        };
        let place = session.submit_place(&draft).unwrap();
        assert_eq!(session.repository().len(), 27);
        assert!(session.recompute().places.iter().any(|v| v.place.id == place.id));
    }

    #[test]
    fn test_geolocation_success_switches_to_distance() {
        let mut session = session();
        let origin = Coordinates { lat: -12.1211, lon: -77.0297 };
        assert!(session.apply_geolocation::<String>(Ok(origin)));
        assert_eq!(session.sort(), SortKey::Distance);

        let view = session.recompute();
        assert_eq!(view.places[0].place.name, "Parque Miguel Grau");
        assert!(view.places.iter().all(|v| v.distance_km.is_some()));
    }

    #[test]
    fn test_geolocation_failure_keeps_position() {
        let mut session = session();
        let origin = Coordinates { lat: -12.1211, lon: -77.0297 };
        session.apply_geolocation::<String>(Ok(origin));
        session.set_sort(SortKey::Name);

        assert!(!session.apply_geolocation(Err("permission denied")));
        assert!(!session.apply_geolocation::<String>(Ok(Coordinates { lat: 91.0, lon: 0.0 })));
        assert_eq!(session.position(), Some(&origin));
        assert_eq!(session.sort(), SortKey::Name);
    }

    #[test]
    fn test_snapshot_replaces_custom_places() {
        let mut session = session();
        session.apply_snapshot(vec![Place::new(PlaceType::Park, "Nuevo", "Surco")]);
        session.apply_snapshot(vec![Place::new(PlaceType::Park, "Otro", "Surco")]);

        let names: Vec<_> =
            session.repository().custom_places().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, vec!["Otro"]);
    }
}
