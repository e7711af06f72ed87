//! File-backed blob storage: one `<name>.json` file per blob

use async_trait::async_trait;
use fundos_core::error::Result;
use std::io::{self, ErrorKind};
use std::path::PathBuf;

use crate::ports::StateStore;

#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    /// Store blobs under `root`; the directory is created on first save
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn blob_path(&self, name: &str) -> io::Result<PathBuf> {
        let valid = !name.is_empty()
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("invalid blob name: {:?}", name),
            ));
        }
        Ok(self.root.join(format!("{}.json", name)))
    }
}

#[async_trait]
impl StateStore for JsonDirStore {
    async fn load_blob(&self, name: &str) -> Result<Option<String>> {
        let path = self.blob_path(name)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "Loaded blob");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Written to a temporary file first, then renamed over the blob
    async fn save_blob(&self, name: &str, contents: &str) -> Result<()> {
        let path = self.blob_path(name)?;
        tokio::fs::create_dir_all(&self.root).await?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, contents).await?;
        tokio::fs::rename(&tmp, &path).await?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "Saved blob");
        Ok(())
    }
}
