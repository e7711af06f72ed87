//! List command implementation

use crate::cli::ListArgs;
use crate::context::AppContext;
use crate::output::OutputWriter;
use crate::output_types::ListOutput;
use anyhow::Result;
use fundos_core::models::SortKey;
use fundos_engine::VisiblePlace;
use tabled::Tabled;

#[derive(Tabled)]
pub(crate) struct PlaceRow {
    #[tabled(rename = "✓")]
    visited: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    place_type: &'static str,
    #[tabled(rename = "District")]
    district: String,
    #[tabled(rename = "Distance")]
    distance: String,
    #[tabled(rename = "Drive")]
    drive: String,
    #[tabled(rename = "ID")]
    id: String,
}

pub(crate) fn place_rows(places: &[VisiblePlace]) -> Vec<PlaceRow> {
    places
        .iter()
        .map(|v| PlaceRow {
            visited: if v.visited { "✓" } else { "" },
            name: v.place.name.clone(),
            place_type: v.place.place_type.label(),
            district: v.place.district.clone(),
            distance: v.distance_label.clone().unwrap_or_else(|| "-".to_string()),
            drive: v.drive_time_label.clone().unwrap_or_else(|| "-".to_string()),
            id: v.place.id.to_string(),
        })
        .collect()
}

pub async fn execute(args: ListArgs, ctx: &mut AppContext, output: &OutputWriter) -> Result<()> {
    if let Some(sort) = &args.sort {
        if sort.parse::<SortKey>().is_err() {
            output.warning(format!("Unknown sort key '{}', sorting by type", sort));
        }
    }
    ctx.apply_view_args(&args.view, args.sort.as_deref());

    let view = ctx.recompute().await?;

    if output.is_json() {
        return output.result(ListOutput::from(view));
    }

    let count = view.places.len();
    output.table(place_rows(&view.places));
    output.kv(
        "Visited",
        format!("{}/{} ({}%)", view.progress.visited, view.progress.total, view.progress.percent),
    );
    output.kv("Showing", format!("{} places sorted by {}", count, view.sort));

    if view.sort == SortKey::Distance && ctx.session.position().is_none() {
        output.info("Distances need a position: fundos locate --lat <LAT> --lon <LON>");
    }
    Ok(())
}
