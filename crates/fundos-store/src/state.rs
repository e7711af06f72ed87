//! Session state persisted as independent named blobs.
//!
//! Loading never fails: a blob that is missing, unreadable or of the wrong
//! shape falls back to its default value and the others load as usual.

use fundos_core::error::Result;
use fundos_core::models::{FilterState, Place, PlaceType, UserPosition, VisitedSet};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ports::StateStore;
use crate::records::{places_from_records, records_from_value, PlaceRecord};

pub const VISITED_BLOB: &str = "visited-parks-and-fundos-v1";
pub const POSITION_BLOB: &str = "user-pos-v1";
pub const FILTERS_BLOB: &str = "filters-v1";
pub const CUSTOM_PLACES_BLOB: &str = "custom-places-v1";

/// Persisted facet selections; search and only-pending are not kept
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterBlob {
    pub types: Vec<String>,
    pub districts: Vec<String>,
}

impl FilterBlob {
    /// Unknown type names are dropped
    pub fn into_filter(self) -> FilterState {
        let types = self.types.iter().filter_map(|t| match t.parse::<PlaceType>() {
            Ok(place_type) => Some(place_type),
            Err(_) => {
                tracing::warn!(place_type = %t, "Dropping unknown type from saved filters");
                None
            }
        });
        FilterState::new().with_types(types).with_districts(self.districts)
    }
}

impl From<&FilterState> for FilterBlob {
    fn from(filter: &FilterState) -> Self {
        Self {
            types: filter.selected_types.iter().map(|t| t.label().to_string()).collect(),
            districts: filter.selected_districts.iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    pub visited: VisitedSet,
    pub position: Option<UserPosition>,
    pub filter: FilterState,
    pub custom_places: Vec<Place>,
}

impl PersistedState {
    /// Load every blob, falling back to defaults for anything unusable
    pub async fn load<S: StateStore + ?Sized>(store: &S) -> Self {
        let visited = load_or_default::<VisitedSet, _>(store, VISITED_BLOB).await;

        let position = load_or_default::<Option<UserPosition>, _>(store, POSITION_BLOB)
            .await
            .filter(|p| {
                let valid = p.is_valid();
                if !valid {
                    tracing::warn!(blob = POSITION_BLOB, "Ignoring out-of-range saved position");
                }
                valid
            });

        let filter = load_or_default::<FilterBlob, _>(store, FILTERS_BLOB).await.into_filter();

        let custom_places = match load_value(store, CUSTOM_PLACES_BLOB).await {
            Some(value) => places_from_records(records_from_value(value)),
            None => Vec::new(),
        };

        tracing::debug!(
            visited = visited.len(),
            has_position = position.is_some(),
            custom = custom_places.len(),
            "Loaded persisted state"
        );

        Self { visited, position, filter, custom_places }
    }

    pub async fn save_visited<S: StateStore + ?Sized>(
        store: &S,
        visited: &VisitedSet,
    ) -> Result<()> {
        save_json(store, VISITED_BLOB, visited).await
    }

    pub async fn save_position<S: StateStore + ?Sized>(
        store: &S,
        position: Option<&UserPosition>,
    ) -> Result<()> {
        save_json(store, POSITION_BLOB, &position).await
    }

    pub async fn save_filter<S: StateStore + ?Sized>(
        store: &S,
        filter: &FilterState,
    ) -> Result<()> {
        save_json(store, FILTERS_BLOB, &FilterBlob::from(filter)).await
    }

    pub async fn save_custom_places<S: StateStore + ?Sized>(
        store: &S,
        places: &[Place],
    ) -> Result<()> {
        let records: Vec<PlaceRecord> = places.iter().map(PlaceRecord::from).collect();
        save_json(store, CUSTOM_PLACES_BLOB, &records).await
    }
}

async fn save_json<S, T>(store: &S, name: &str, value: &T) -> Result<()>
where
    S: StateStore + ?Sized,
    T: Serialize + ?Sized,
{
    let contents = serde_json::to_string(value)?;
    store.save_blob(name, &contents).await
}

/// Raw JSON of a blob, or `None` when missing or unusable
async fn load_value<S: StateStore + ?Sized>(store: &S, name: &str) -> Option<Value> {
    let contents = match store.load_blob(name).await {
        Ok(Some(contents)) => contents,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(blob = name, error = %e, "Could not read blob; using default");
            return None;
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(blob = name, error = %e, "Corrupt blob; using default");
            None
        }
    }
}

async fn load_or_default<T, S>(store: &S, name: &str) -> T
where
    T: DeserializeOwned + Default,
    S: StateStore + ?Sized,
{
    let Some(value) = load_value(store, name).await else {
        return T::default();
    };

    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::warn!(blob = name, error = %e, "Unexpected blob shape; using default");
        T::default()
    })
}
