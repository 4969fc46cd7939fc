// Flat-file drawing persistence
use crate::application::drawing_repository::DrawingRepository;
use crate::domain::drawing::DrawingDocument;
use crate::domain::error::ServiceError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Stores the drawing document as pretty-printed JSON in a single file.
///
/// Each save writes a sibling temp file and renames it over the target, so a
/// reader never observes a half-written document. No lock is taken; when two
/// saves race, the last rename wins.
#[derive(Debug, Clone)]
pub struct FileDrawingStore {
    path: PathBuf,
}

impl FileDrawingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }
}

#[async_trait]
impl DrawingRepository for FileDrawingStore {
    async fn save(&self, document: &DrawingDocument) -> Result<(), ServiceError> {
        let body = serde_json::to_vec_pretty(document.as_value()).map_err(ServiceError::Parse)?;

        let temp = self.temp_path();
        tokio::fs::write(&temp, &body)
            .await
            .map_err(ServiceError::Storage)?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(ServiceError::Storage)
    }

    async fn load(&self) -> Result<DrawingDocument, ServiceError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(ServiceError::Storage)?;

        let value = serde_json::from_slice(&raw).map_err(ServiceError::Parse)?;
        Ok(DrawingDocument::from_stored(value))
    }
}
