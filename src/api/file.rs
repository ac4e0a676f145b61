//! Local JSON file resource source, for offline browsing of an exported payload.

use async_trait::async_trait;
use std::path::PathBuf;

use super::{parse_resources, ApiError, FetchOutcome, ResourceSource};

pub struct FileResourceSource {
    path: PathBuf,
}

impl FileResourceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ResourceSource for FileResourceSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn fetch_resources(&self) -> Result<FetchOutcome, ApiError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ApiError::Network(format!("{}: {}", self.path.display(), e)))?;

        parse_resources(&body)
    }
}
