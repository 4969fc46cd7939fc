// Drawing service - Use case for saving and loading the drawing document
use crate::application::drawing_repository::DrawingRepository;
use crate::domain::drawing::DrawingDocument;
use crate::domain::error::ServiceError;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct DrawingService {
    repository: Arc<dyn DrawingRepository>,
}

impl DrawingService {
    pub fn new(repository: Arc<dyn DrawingRepository>) -> Self {
        Self { repository }
    }

    /// Validate the raw body shallowly, then overwrite the stored document.
    /// A validation failure leaves whatever was previously persisted intact.
    pub async fn save(&self, body: Value) -> Result<(), ServiceError> {
        let document = DrawingDocument::try_from(body)?;
        self.repository.save(&document).await
    }

    pub async fn load(&self) -> Result<DrawingDocument, ServiceError> {
        self.repository.load().await
    }
}
