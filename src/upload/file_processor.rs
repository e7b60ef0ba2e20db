use super::client::{ApiClient, UploadPart};
use super::correlate::correlate;
use crate::error::Result;
use crate::selection::{FileId, FileStatus, SubmittedItem};
use tracing::{debug, warn};

pub type FileOutcome = (FileId, FileStatus);

#[derive(Clone)]
pub struct FileProcessor {
    client: ApiClient,
}

impl FileProcessor {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn process_files(&self, items: Vec<SubmittedItem>) -> Result<Vec<FileOutcome>> {
        let mut parts = Vec::with_capacity(items.len());
        for item in &items {
            let bytes = tokio::fs::read(&item.path).await.map_err(|e| {
                warn!(path = %item.path.display(), "failed to read selected file: {}", e);
                e
            })?;
            debug!(name = %item.name, size = bytes.len(), "file queued for upload");
            parts.push(UploadPart {
                file_name: item.name.clone(),
                bytes,
            });
        }

        let results = self.client.submit_batch(parts).await?;
        let outcomes = correlate(&items, &results);
        if outcomes.len() < items.len() {
            debug!(
                unmatched = items.len() - outcomes.len(),
                "some files had no matching result"
            );
        }
        Ok(outcomes)
    }
}
