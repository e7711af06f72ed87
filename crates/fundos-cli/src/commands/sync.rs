//! Sync command implementation

use crate::cli::SyncArgs;
use crate::context::AppContext;
use crate::errors;
use crate::output::OutputWriter;
use crate::output_types::SyncOutput;
use anyhow::Result;
use fundos_store::{places_from_records, JsonSnapshotFeed, PlaceFeed};

pub async fn execute(args: SyncArgs, ctx: &mut AppContext, output: &OutputWriter) -> Result<()> {
    let mut feed = JsonSnapshotFeed::new(&args.path);
    let mut snapshots = 0;
    let mut records = 0;
    let mut accepted = 0;

    // each snapshot replaces the previous one entirely
    while let Some(snapshot) = feed
        .next_snapshot()
        .await
        .map_err(|e| errors::snapshot_unreadable(&args.path.display().to_string(), e))?
    {
        snapshots += 1;
        records = snapshot.len();
        let places = places_from_records(snapshot);
        accepted = places.len();
        ctx.session.apply_snapshot(places);
    }

    ctx.save_custom_places().await?;
    ctx.recompute().await?;

    let result = SyncOutput {
        snapshots,
        records,
        accepted,
        custom_places: ctx.session.repository().custom_places().len(),
    };

    if output.is_json() {
        return output.result(result);
    }

    output.success(format!("Synced {} custom places", result.custom_places));
    if result.accepted < result.records {
        output.warning(format!(
            "{} of {} records were rejected (run with RUST_LOG=warn for details)",
            result.records - result.accepted,
            result.records
        ));
    }
    Ok(())
}
