//! Remote sync feed adapters

use async_trait::async_trait;
use fundos_core::error::{FundosError, Result};
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::ports::PlaceFeed;
use crate::records::{records_from_value, PlaceRecord};

/// Feed backed by an in-process channel; closes when every sender is dropped
#[derive(Debug)]
pub struct ChannelFeed {
    receiver: mpsc::Receiver<Vec<PlaceRecord>>,
}

impl ChannelFeed {
    pub fn new(receiver: mpsc::Receiver<Vec<PlaceRecord>>) -> Self {
        Self { receiver }
    }

    /// Create a feed together with the sender that publishes snapshots
    pub fn channel(buffer: usize) -> (mpsc::Sender<Vec<PlaceRecord>>, Self) {
        let (sender, receiver) = mpsc::channel(buffer);
        (sender, Self::new(receiver))
    }
}

#[async_trait]
impl PlaceFeed for ChannelFeed {
    async fn next_snapshot(&mut self) -> Result<Option<Vec<PlaceRecord>>> {
        Ok(self.receiver.recv().await)
    }
}

/// Feed that emits the snapshot held in a JSON file once, then closes
#[derive(Debug, Clone)]
pub struct JsonSnapshotFeed {
    path: PathBuf,
    emitted: bool,
}

impl JsonSnapshotFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), emitted: false }
    }
}

#[async_trait]
impl PlaceFeed for JsonSnapshotFeed {
    async fn next_snapshot(&mut self) -> Result<Option<Vec<PlaceRecord>>> {
        if self.emitted {
            return Ok(None);
        }
        self.emitted = true;

        let contents = tokio::fs::read_to_string(&self.path).await?;
        let value: serde_json::Value = serde_json::from_str(&contents)?;
        // Only a top-level list is a snapshot; it must never read as empty
        if !value.is_array() {
            return Err(FundosError::Serialization(
                "snapshot must be a JSON list of place records".to_string(),
            ));
        }
        let records = records_from_value(value);

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "Read snapshot file"
        );
        Ok(Some(records))
    }
}
