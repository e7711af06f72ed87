//! Add command implementation

use crate::cli::AddArgs;
use crate::context::AppContext;
use crate::errors;
use crate::interactive::interactive_add;
use crate::output::OutputWriter;
use crate::output_types::AddOutput;
use anyhow::Result;
use fundos_core::models::{Coordinates, PlaceDraft};
use fundos_geo::parse_coordinates_from_url;

pub async fn execute(args: AddArgs, ctx: &mut AppContext, output: &OutputWriter) -> Result<()> {
    let draft = if args.interactive {
        interactive_add()?
    } else {
        draft_from_args(args)?
    };

    let existed = draft
        .validate()
        .ok()
        .is_some_and(|p| ctx.session.repository().get(&p.id).is_some());

    let place = ctx.session.submit_place(&draft).map_err(errors::invalid_place)?;
    ctx.save_custom_places().await?;

    // a new district may make saved selections stale or available again
    ctx.recompute().await?;

    if output.is_json() {
        return output.result(AddOutput { place, replaced: existed });
    }

    if existed {
        output.success(format!("Updated {} ({})", place.name, place.id));
    } else {
        output.success(format!("Added {} ({})", place.name, place.id));
    }
    match place.coordinates {
        Some(c) => output.kv("Coordinates", format!("{}, {}", c.lat, c.lon)),
        None => output.info("No coordinates: the place will sort last by distance"),
    }
    Ok(())
}

fn draft_from_args(args: AddArgs) -> Result<PlaceDraft> {
    let coordinates = match (&args.link, args.lat, args.lon) {
        (Some(link), _, _) => Some(
            parse_coordinates_from_url(link).ok_or_else(|| errors::link_without_coordinates(link))?,
        ),
        (None, Some(lat), Some(lon)) => Some(Coordinates { lat, lon }),
        _ => None,
    };

    Ok(PlaceDraft {
        name: args.name.unwrap_or_default(),
        district: args.district.unwrap_or_default(),
        place_type: args.place_type.unwrap_or_default(),
        coordinates,
    })
}
