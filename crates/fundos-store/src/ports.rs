use async_trait::async_trait;
use fundos_core::error::Result;

use crate::records::PlaceRecord;

/// Port for named JSON blobs that outlive a session
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Load a blob's raw contents; `None` if it was never saved
    async fn load_blob(&self, name: &str) -> Result<Option<String>>;

    /// Save a blob, replacing any previous contents
    async fn save_blob(&self, name: &str, contents: &str) -> Result<()>;
}

/// Port for a remote source of full custom-place snapshots
#[async_trait]
pub trait PlaceFeed: Send {
    /// Wait for the next snapshot.
    ///
    /// Every snapshot is authoritative for the whole custom subset.
    /// Returns `None` once the feed is closed.
    async fn next_snapshot(&mut self) -> Result<Option<Vec<PlaceRecord>>>;
}
