// Repository trait for the GPS tracking upstream
use crate::domain::error::ServiceError;
use crate::domain::tracker::{Device, Position};
use async_trait::async_trait;

#[async_trait]
pub trait TrackingRepository: Send + Sync {
    /// Fetch the last known position of every device
    async fn fetch_positions(&self) -> Result<Vec<Position>, ServiceError>;

    /// Fetch all registered devices
    async fn fetch_devices(&self) -> Result<Vec<Device>, ServiceError>;
}
