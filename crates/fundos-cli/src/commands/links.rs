//! Links and parse-link command implementations

use crate::cli::{LinksArgs, ParseLinkArgs};
use crate::context::AppContext;
use crate::output::OutputWriter;
use crate::output_types::{LinksOutput, ParseLinkOutput};
use anyhow::Result;
use fundos_geo::{navigation_links, parse_coordinates_from_url};

pub fn execute(args: LinksArgs, ctx: &AppContext, output: &OutputWriter) -> Result<()> {
    let place = ctx.find_place(&args.id)?;
    let links = navigation_links(&place, ctx.session.position(), &ctx.link_context());

    if output.is_json() {
        return output.result(LinksOutput {
            id: place.id.to_string(),
            name: place.name,
            by_coordinates: place.coordinates.is_some(),
            links,
        });
    }

    output.section(&place.name);
    output.kv("Waze", &links.waze);
    output.kv("Google Maps", &links.google_maps);
    if place.coordinates.is_none() {
        output.info("No coordinates for this place; the links search by name and district");
    }
    Ok(())
}

/// Not finding coordinates is a normal outcome, not an error
pub fn parse_link(args: &ParseLinkArgs, output: &OutputWriter) -> Result<()> {
    let coordinates = parse_coordinates_from_url(&args.url);

    if output.is_json() {
        return output.result(ParseLinkOutput { url: args.url.clone(), coordinates });
    }

    match coordinates {
        Some(c) => {
            output.kv("Latitude", c.lat);
            output.kv("Longitude", c.lon);
        }
        None => output.warning("No coordinates found in link"),
    }
    Ok(())
}
