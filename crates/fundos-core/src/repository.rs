//! Place Repository: the fixed base catalog plus user and remote additions
//!
//! Reads always go through [`PlaceRepository::all_places`], which concatenates
//! the base catalog (in catalog order) with the custom places (in arrival
//! order). The base catalog itself is never mutated; a custom place whose id
//! matches a base entry takes that entry's slot in the read view.

use std::collections::{HashMap, HashSet};

use crate::catalog::base_catalog;
use crate::models::{Coordinates, Place, PlaceId};

/// Result of an upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

#[derive(Debug, Clone)]
pub struct PlaceRepository {
    base: Vec<Place>,
    base_ids: HashSet<PlaceId>,
    custom: Vec<Place>,
    coordinates: HashMap<PlaceId, Coordinates>,
}

impl PlaceRepository {
    /// Create a repository over the given base places
    pub fn new(base: Vec<Place>) -> Self {
        let base_ids = base.iter().map(|p| p.id.clone()).collect();
        let coordinates = base
            .iter()
            .filter_map(|p| p.coordinates.map(|c| (p.id.clone(), c)))
            .collect();
        Self { base, base_ids, custom: Vec::new(), coordinates }
    }

    /// Repository over the built-in parks and estates
    pub fn with_base_catalog() -> Self {
        Self::new(base_catalog())
    }

    /// Unified read view: base places, then custom places.
    ///
    /// Each returned place carries the coordinates from the side-table.
    pub fn all_places(&self) -> Vec<Place> {
        let overlay: HashMap<&PlaceId, &Place> = self
            .custom
            .iter()
            .filter(|p| self.base_ids.contains(&p.id))
            .map(|p| (&p.id, p))
            .collect();

        self.base
            .iter()
            .map(|p| overlay.get(&p.id).copied().unwrap_or(p))
            .chain(self.custom.iter().filter(|p| !self.base_ids.contains(&p.id)))
            .map(|p| {
                let mut place = p.clone();
                place.coordinates = self.coordinates.get(&p.id).copied();
                place
            })
            .collect()
    }

    /// Places added by the user or the sync feed, in arrival order
    pub fn custom_places(&self) -> &[Place] {
        &self.custom
    }

    /// Look up a place by id in the read view
    pub fn get(&self, id: &PlaceId) -> Option<Place> {
        let place = self
            .custom
            .iter()
            .find(|p| &p.id == id)
            .or_else(|| self.base.iter().find(|p| &p.id == id))?;
        let mut place = place.clone();
        place.coordinates = self.coordinates.get(id).copied();
        Some(place)
    }

    pub fn coordinates(&self, id: &PlaceId) -> Option<Coordinates> {
        self.coordinates.get(id).copied()
    }

    /// Number of distinct places in the read view
    pub fn len(&self) -> usize {
        self.base.len() + self.custom.iter().filter(|p| !self.base_ids.contains(&p.id)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a custom place, or replace the entry with the same id entirely.
    ///
    /// A replacement keeps the original arrival position. The coordinate
    /// side-table follows the new record: set when it has coordinates,
    /// cleared when it does not.
    pub fn upsert(&mut self, place: Place) -> UpsertOutcome {
        let outcome = upsert_into(&mut self.custom, &mut self.coordinates, place);
        tracing::debug!(?outcome, custom = self.custom.len(), "Upserted custom place");
        outcome
    }

    /// Replace every custom place with a fresh snapshot.
    ///
    /// The new state is assembled off to the side and swapped in at once.
    pub fn replace_all(&mut self, places: impl IntoIterator<Item = Place>) {
        let mut coordinates: HashMap<PlaceId, Coordinates> = self
            .base
            .iter()
            .filter_map(|p| p.coordinates.map(|c| (p.id.clone(), c)))
            .collect();
        let mut custom = Vec::new();
        for place in places {
            upsert_into(&mut custom, &mut coordinates, place);
        }

        tracing::debug!(
            previous = self.custom.len(),
            current = custom.len(),
            "Replaced custom places"
        );
        self.custom = custom;
        self.coordinates = coordinates;
    }
}

impl Default for PlaceRepository {
    fn default() -> Self {
        Self::with_base_catalog()
    }
}

fn upsert_into(
    custom: &mut Vec<Place>,
    coordinates: &mut HashMap<PlaceId, Coordinates>,
    place: Place,
) -> UpsertOutcome {
    match place.coordinates {
        Some(c) => {
            coordinates.insert(place.id.clone(), c);
        }
        None => {
            coordinates.remove(&place.id);
        }
    }

    match custom.iter_mut().find(|p| p.id == place.id) {
        Some(existing) => {
            *existing = place;
            UpsertOutcome::Replaced
        }
        None => {
            custom.push(place);
            UpsertOutcome::Inserted
        }
    }
}
