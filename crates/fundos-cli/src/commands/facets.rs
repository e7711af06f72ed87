//! Facets command implementation

use crate::cli::FacetsArgs;
use crate::context::AppContext;
use crate::output::OutputWriter;
use crate::output_types::FacetsOutput;
use anyhow::Result;
use console::style;

pub async fn execute(args: FacetsArgs, ctx: &mut AppContext, output: &OutputWriter) -> Result<()> {
    ctx.apply_view_args(&args.view, None);
    let view = ctx.recompute().await?;
    print_facets(&FacetsOutput::from_view(&view, ctx.session.filter()), output)
}

/// Print chips in human mode, or the facets as the JSON result
pub(crate) fn print_facets(facets: &FacetsOutput, output: &OutputWriter) -> Result<()> {
    if output.is_json() {
        return output.result(facets);
    }

    output.section("Types");
    for chip in &facets.types {
        println!("  {} {} ({})", marker(chip.selected), chip.place_type, chip.count);
    }

    output.section("Districts");
    if !facets.district_facet_visible {
        output.info("Select a type to filter by district: fundos filter type Parque");
        return Ok(());
    }
    println!(
        "  {} Todos ({})",
        marker(facets.all_districts_selected),
        facets.select_all_total
    );
    for chip in &facets.districts {
        println!("  {} {} ({})", marker(chip.selected), chip.district, chip.count);
    }
    Ok(())
}

fn marker(selected: bool) -> String {
    if selected {
        style("[x]").green().bold().to_string()
    } else {
        style("[ ]").dim().to_string()
    }
}
