//! Filter command implementation

use crate::cli::{FilterAction, FilterArgs};
use crate::commands::facets::print_facets;
use crate::context::AppContext;
use crate::errors;
use crate::output::OutputWriter;
use crate::output_types::FacetsOutput;
use anyhow::Result;
use fundos_core::models::PlaceType;

pub async fn execute(args: FilterArgs, ctx: &mut AppContext, output: &OutputWriter) -> Result<()> {
    match args.action {
        FilterAction::Type { name } => {
            let place_type: PlaceType =
                name.parse().map_err(|_| errors::unknown_type(&name))?;
            ctx.session.toggle_type(place_type);
        }
        FilterAction::District { name } => ctx.session.toggle_district(name.trim()),
        FilterAction::AllDistricts => ctx.session.toggle_all_districts(),
        FilterAction::Clear => ctx.session.clear_filters(),
    }

    let view = ctx.recompute().await?;
    ctx.save_filter().await?;

    output.success("Filters updated");
    print_facets(&FacetsOutput::from_view(&view, ctx.session.filter()), output)
}
