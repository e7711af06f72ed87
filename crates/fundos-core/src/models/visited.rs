use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Place, PlaceId};

/// Per-place "visited" flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitedSet(HashMap<PlaceId, bool>);

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absent ids count as not visited
    pub fn is_visited(&self, id: &PlaceId) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    /// Record an explicit user toggle
    pub fn set(&mut self, id: PlaceId, visited: bool) {
        self.0.insert(id, visited);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Visited totals over the given places
    pub fn progress<'a>(&self, places: impl IntoIterator<Item = &'a Place>) -> Progress {
        let mut total = 0;
        let mut visited = 0;
        for place in places {
            total += 1;
            if self.is_visited(&place.id) {
                visited += 1;
            }
        }
        Progress::new(visited, total)
    }
}

impl FromIterator<(PlaceId, bool)> for VisitedSet {
    fn from_iter<I: IntoIterator<Item = (PlaceId, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// How much of the catalog has been visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub visited: usize,
    pub total: usize,
    /// Rounded to the nearest integer
    pub percent: u32,
}

impl Progress {
    pub fn new(visited: usize, total: usize) -> Self {
        let percent = ((visited as f64 / total.max(1) as f64) * 100.0).round() as u32;
        Self { visited, total, percent }
    }
}
