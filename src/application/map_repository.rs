// Repository trait for the map-tile/geocoding upstream
use crate::domain::error::ServiceError;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait MapResourceRepository: Send + Sync {
    /// Fetch a JSON resource from the map upstream, forwarding `params` as
    /// query parameters. Credential injection is the implementation's job;
    /// callers never supply the access token.
    async fn fetch_resource(
        &self,
        endpoint: &str,
        params: &HashMap<String, String>,
    ) -> Result<serde_json::Value, ServiceError>;
}
