//! Session loading and saving around a single command

use anyhow::{Context, Result};
use fundos_core::config::{CliConfigOverrides, LayeredConfig};
use fundos_core::models::{Place, PlaceId, SortKey};
use fundos_core::{CatalogCollator, PlaceRepository};
use fundos_engine::{Session, View};
use fundos_geo::LinkContext;
use fundos_store::{JsonDirStore, PersistedState};
use std::path::{Path, PathBuf};

use crate::cli::{Cli, ViewArgs};
use crate::config_loader::{load_config_with_overrides, resolve_data_dir};
use crate::errors;

pub struct AppContext {
    data_dir: PathBuf,
    pub config: LayeredConfig,
    pub store: JsonDirStore,
    pub session: Session,
}

impl AppContext {
    /// Load configuration and saved state for the data directory
    pub async fn load(cli: &Cli) -> Result<Self> {
        let data_dir = resolve_data_dir(cli.data_dir.clone());
        let overrides = CliConfigOverrides { locale: cli.locale.clone(), ..Default::default() };
        let config = load_config_with_overrides(&data_dir, overrides)?;

        let locale = config.locale.value.clone();
        let collator =
            CatalogCollator::new(&locale).map_err(|e| errors::invalid_locale(&locale, e))?;

        let store = JsonDirStore::new(&data_dir);
        let state = PersistedState::load(&store).await;

        let mut repository = PlaceRepository::with_base_catalog();
        repository.replace_all(state.custom_places);

        let session = Session::new(repository, collator)
            .with_visited(state.visited)
            .with_filter(state.filter)
            .with_position(state.position)
            .with_sort(config.default_sort.value);

        tracing::debug!(data_dir = %data_dir.display(), locale = %locale, "Loaded session");
        Ok(Self { data_dir, config, store, session })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn link_context(&self) -> LinkContext {
        LinkContext {
            city: self.config.city.value.clone(),
            country: self.config.country.value.clone(),
        }
    }

    /// Apply transient search options and an optional sort key
    pub fn apply_view_args(&mut self, view: &ViewArgs, sort: Option<&str>) {
        if let Some(search) = &view.search {
            self.session.set_search(search.clone());
        }
        self.session.set_only_pending(view.only_pending);
        if let Some(sort) = sort {
            self.session.set_sort(SortKey::parse_lenient(sort));
        }
    }

    /// Recompute the view and save the filter if stale districts were dropped
    pub async fn recompute(&mut self) -> Result<View> {
        let view = self.session.recompute();
        if view.filter_changed {
            self.save_filter().await?;
        }
        Ok(view)
    }

    pub fn find_place(&self, id: &str) -> Result<Place> {
        self.session
            .repository()
            .get(&PlaceId::from(id))
            .ok_or_else(|| errors::place_not_found(id).into())
    }

    pub async fn save_filter(&self) -> Result<()> {
        PersistedState::save_filter(&self.store, self.session.filter())
            .await
            .context("Failed to save filters")
    }

    pub async fn save_visited(&self) -> Result<()> {
        PersistedState::save_visited(&self.store, self.session.visited())
            .await
            .context("Failed to save visited places")
    }

    pub async fn save_position(&self) -> Result<()> {
        PersistedState::save_position(&self.store, self.session.position())
            .await
            .context("Failed to save position")
    }

    pub async fn save_custom_places(&self) -> Result<()> {
        PersistedState::save_custom_places(&self.store, self.session.repository().custom_places())
            .await
            .context("Failed to save custom places")
    }
}
