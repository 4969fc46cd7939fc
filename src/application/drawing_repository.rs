// Repository trait for drawing document persistence
use crate::domain::drawing::DrawingDocument;
use crate::domain::error::ServiceError;
use async_trait::async_trait;

#[async_trait]
pub trait DrawingRepository: Send + Sync {
    /// Overwrite the stored document wholesale
    async fn save(&self, document: &DrawingDocument) -> Result<(), ServiceError>;

    /// Load the stored document; fails with `Storage` when nothing has been
    /// saved yet and `Parse` when the stored bytes are not valid JSON
    async fn load(&self) -> Result<DrawingDocument, ServiceError>;
}
