//! Status command implementation

use crate::context::AppContext;
use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, StatusOutput};
use anyhow::Result;

pub async fn execute(ctx: &mut AppContext, output: &OutputWriter) -> Result<()> {
    let view = ctx.recompute().await?;

    let mut config: Vec<ConfigEntry> = ctx
        .config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigEntry { key, value, source })
        .collect();
    config.sort_by(|a, b| a.key.cmp(&b.key));

    let status = StatusOutput {
        data_dir: ctx.data_dir().display().to_string(),
        collation_locale: ctx.session.collator().locale().to_string(),
        places: ctx.session.repository().len(),
        custom_places: ctx.session.repository().custom_places().len(),
        progress: view.progress,
        position: ctx.session.position().copied(),
        config,
    };

    if output.is_json() {
        return output.result(status);
    }

    output.section("Progress");
    let progress = &status.progress;
    output.kv(
        "Visited",
        format!("{}/{} ({}%)", progress.visited, progress.total, progress.percent),
    );
    output.kv("Places", status.places);
    output.kv("Custom places", status.custom_places);

    output.section("Position");
    match status.position {
        Some(p) => output.kv("Location", format!("{}, {}", p.lat, p.lon)),
        None => output.kv("Location", "unknown (fundos locate)"),
    }

    output.section("Configuration");
    output.kv("Data directory", &status.data_dir);
    output.kv("Collation", &status.collation_locale);
    for entry in &status.config {
        output.kv(&entry.key, format!("{} ({:?})", entry.value, entry.source));
    }
    Ok(())
}
