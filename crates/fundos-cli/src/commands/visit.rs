//! Visit and unvisit command implementation

use crate::cli::VisitArgs;
use crate::context::AppContext;
use crate::output::OutputWriter;
use crate::output_types::VisitOutput;
use anyhow::Result;

pub async fn execute(
    args: VisitArgs,
    visited: bool,
    ctx: &mut AppContext,
    output: &OutputWriter,
) -> Result<()> {
    let place = ctx.find_place(&args.id)?;
    ctx.session.set_visited(&place.id, visited)?;
    ctx.save_visited().await?;

    let view = ctx.recompute().await?;

    if output.is_json() {
        return output.result(VisitOutput {
            id: place.id.to_string(),
            name: place.name,
            visited,
            progress: view.progress,
        });
    }

    if visited {
        output.success(format!("Visited {}", place.name));
    } else {
        output.success(format!("{} is pending again", place.name));
    }
    output.kv(
        "Progress",
        format!("{}/{} ({}%)", view.progress.visited, view.progress.total, view.progress.percent),
    );
    Ok(())
}
