use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tracing::debug;
use upcoming_events::{EventSource, QueryError, RawEvent, Result};

/// Reads observed events from a JSON file, or from stdin for `-`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_all(&self) -> std::io::Result<Vec<u8>> {
        if self.path == Path::new("-") {
            let mut buf = Vec::new();
            tokio::io::stdin().read_to_end(&mut buf).await?;
            Ok(buf)
        } else {
            tokio::fs::read(&self.path).await
        }
    }
}

#[async_trait]
impl EventSource for JsonFileSource {
    async fn fetch_observed_events(&self) -> Result<Vec<RawEvent>> {
        let bytes = self.read_all().await.map_err(|e| {
            QueryError::upstream(format!("reading {}: {}", self.path.display(), e))
        })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "read events");

        serde_json::from_slice(&bytes).map_err(|e| {
            QueryError::upstream(format!("decoding {}: {}", self.path.display(), e))
        })
    }
}
