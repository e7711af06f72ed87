//! Locate command implementation
//!
//! Stands in for device geolocation: the position comes from flags or a link.

use crate::cli::LocateArgs;
use crate::commands::list::place_rows;
use crate::context::AppContext;
use crate::errors::{self, CliError};
use crate::output::OutputWriter;
use crate::output_types::LocateOutput;
use anyhow::Result;
use fundos_core::models::Coordinates;
use fundos_geo::parse_coordinates_from_url;

const NEAREST: usize = 5;

pub async fn execute(args: LocateArgs, ctx: &mut AppContext, output: &OutputWriter) -> Result<()> {
    let reading = match (&args.link, args.lat, args.lon) {
        (Some(link), _, _) => {
            parse_coordinates_from_url(link).ok_or_else(|| errors::link_without_coordinates(link))
        }
        (None, Some(lat), Some(lon)) => Ok(Coordinates { lat, lon }),
        _ => Err(CliError::new("No position given").with_help("Run: fundos locate --help")),
    };

    let position = reading?;
    if !ctx.session.apply_geolocation::<CliError>(Ok(position)) {
        return Err(CliError::new("Position out of range")
            .with_context(format!(
                "{}, {} is not a valid latitude/longitude",
                position.lat, position.lon
            ))
            .with_suggestion("Latitude must be within [-90, 90] and longitude within [-180, 180]")
            .into());
    }
    ctx.save_position().await?;

    let mut view = ctx.recompute().await?;
    view.places.truncate(NEAREST);

    if output.is_json() {
        return output.result(LocateOutput { position, nearest: view.places });
    }

    output.success(format!("Position set to {}, {}", position.lat, position.lon));
    output.section("Nearest places");
    output.table(place_rows(&view.places));
    Ok(())
}
