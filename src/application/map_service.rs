// Map proxy service - Use case for forwarding map upstream requests
use crate::application::map_repository::MapResourceRepository;
use crate::domain::error::ServiceError;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct MapProxyService {
    repository: Arc<dyn MapResourceRepository>,
}

impl MapProxyService {
    pub fn new(repository: Arc<dyn MapResourceRepository>) -> Self {
        Self { repository }
    }

    pub async fn fetch_resource(
        &self,
        endpoint: &str,
        params: &HashMap<String, String>,
    ) -> Result<serde_json::Value, ServiceError> {
        self.repository.fetch_resource(endpoint, params).await
    }
}
