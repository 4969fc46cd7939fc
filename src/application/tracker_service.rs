// Tracker service - Use case for the merged tracker view
use crate::application::tracking_repository::TrackingRepository;
use crate::domain::error::ServiceError;
use crate::domain::tracker::{merge_trackers, Tracker};
use std::sync::Arc;

#[derive(Clone)]
pub struct TrackerService {
    repository: Arc<dyn TrackingRepository>,
}

impl TrackerService {
    pub fn new(repository: Arc<dyn TrackingRepository>) -> Self {
        Self { repository }
    }

    /// Fetch positions and devices from the tracking upstream and join them.
    /// Either upstream failure fails the whole request; no partial result is
    /// ever produced.
    pub async fn get_trackers(&self) -> Result<Vec<Tracker>, ServiceError> {
        let positions = self.repository.fetch_positions().await?;
        let devices = self.repository.fetch_devices().await?;
        Ok(merge_trackers(positions, &devices))
    }
}
