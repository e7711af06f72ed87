//! Export command implementation

use crate::cli::ExportArgs;
use crate::context::AppContext;
use crate::output::OutputWriter;
use crate::output_types::ExportOutput;
use anyhow::{Context, Result};
use fundos_geo::feature_collection;
use geojson::JsonObject;

pub async fn execute(args: ExportArgs, ctx: &mut AppContext, output: &OutputWriter) -> Result<()> {
    ctx.apply_view_args(&args.view, None);
    let view = ctx.recompute().await?;

    let collection = feature_collection(view.places.iter().map(|v| {
        let mut extra = JsonObject::new();
        extra.insert("visited".to_string(), v.visited.into());
        if let Some(km) = v.distance_km {
            extra.insert("distance_km".to_string(), km.into());
        }
        (&v.place, extra)
    }));
    let features = collection.features.len();

    let Some(path) = args.output else {
        if output.is_json() {
            return output.result(collection);
        }
        println!("{}", serde_json::to_string_pretty(&collection)?);
        return Ok(());
    };

    let contents = serde_json::to_string_pretty(&collection)?;
    tokio::fs::write(&path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    if output.is_json() {
        return output.result(ExportOutput { path: path.display().to_string(), features });
    }
    output.success(format!("Exported {} places to {}", features, path.display()));
    Ok(())
}
