use fundos_core::config::ConfigSource;
use fundos_core::models::{Coordinates, FilterState, Place, PlaceType, Progress, SortKey};
use fundos_engine::{View, VisiblePlace};
use fundos_geo::NavigationLinks;
use serde::Serialize;

/// Output for list command
#[derive(Debug, Serialize)]
pub struct ListOutput {
    pub sort: SortKey,
    pub count: usize,
    pub places: Vec<VisiblePlace>,
    pub progress: Progress,
}

impl From<View> for ListOutput {
    fn from(view: View) -> Self {
        Self {
            sort: view.sort,
            count: view.places.len(),
            places: view.places,
            progress: view.progress,
        }
    }
}

/// Output for facets and filter commands
#[derive(Debug, Serialize)]
pub struct FacetsOutput {
    pub types: Vec<TypeChip>,
    pub district_facet_visible: bool,
    pub districts: Vec<DistrictChip>,
    pub all_districts_selected: bool,
    pub select_all_total: usize,
}

#[derive(Debug, Serialize)]
pub struct TypeChip {
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    pub count: usize,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct DistrictChip {
    pub district: String,
    pub count: usize,
    pub selected: bool,
}

impl FacetsOutput {
    pub fn from_view(view: &View, selected: &FilterState) -> Self {
        let types = PlaceType::ALL
            .iter()
            .map(|t| TypeChip {
                place_type: *t,
                count: view.facets.type_count(*t),
                selected: selected.selected_types.contains(t),
            })
            .collect();

        let districts = view
            .facets
            .available_districts
            .iter()
            .map(|d| DistrictChip {
                district: d.clone(),
                count: view.facets.district_count(d),
                selected: selected.selected_districts.contains(d),
            })
            .collect();

        Self {
            types,
            district_facet_visible: view.district_facet_visible,
            districts,
            all_districts_selected: view.all_districts_selected,
            select_all_total: view.select_all_total,
        }
    }
}

/// Output for visit and unvisit commands
#[derive(Debug, Serialize)]
pub struct VisitOutput {
    pub id: String,
    pub name: String,
    pub visited: bool,
    pub progress: Progress,
}

/// Output for status command
#[derive(Debug, Serialize)]
pub struct StatusOutput {
    pub data_dir: String,
    pub collation_locale: String,
    pub places: usize,
    pub custom_places: usize,
    pub progress: Progress,
    pub position: Option<Coordinates>,
    pub config: Vec<ConfigEntry>,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub source: ConfigSource,
}

/// Output for add command
#[derive(Debug, Serialize)]
pub struct AddOutput {
    pub place: Place,
    pub replaced: bool,
}

/// Output for locate command
#[derive(Debug, Serialize)]
pub struct LocateOutput {
    pub position: Coordinates,
    pub nearest: Vec<VisiblePlace>,
}

/// Output for parse-link command
#[derive(Debug, Serialize)]
pub struct ParseLinkOutput {
    pub url: String,
    pub coordinates: Option<Coordinates>,
}

/// Output for links command
#[derive(Debug, Serialize)]
pub struct LinksOutput {
    pub id: String,
    pub name: String,
    pub by_coordinates: bool,
    pub links: NavigationLinks,
}

/// Output for sync command
#[derive(Debug, Serialize)]
pub struct SyncOutput {
    pub snapshots: usize,
    pub records: usize,
    pub accepted: usize,
    pub custom_places: usize,
}

/// Output for export command when written to a file
#[derive(Debug, Serialize)]
pub struct ExportOutput {
    pub path: String,
    pub features: usize,
}
