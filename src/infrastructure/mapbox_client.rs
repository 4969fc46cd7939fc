// Mapbox HTTP client with server-side access token injection
use crate::application::map_repository::MapResourceRepository;
use crate::domain::error::ServiceError;
use async_trait::async_trait;
use std::collections::HashMap;

const SERVICE: &str = "mapbox";
const ACCESS_TOKEN: &str = "access_token";

#[derive(Debug, Clone)]
pub struct MapboxClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl MapboxClient {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }
}

/// Merge caller query parameters with the configured token. A caller-supplied
/// `access_token` is discarded so the server credential always wins.
fn query_params(token: &str, caller: &HashMap<String, String>) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = caller
        .iter()
        .filter(|(key, _)| key.as_str() != ACCESS_TOKEN)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    params.sort();
    params.push((ACCESS_TOKEN.to_string(), token.to_string()));
    params
}

#[async_trait]
impl MapResourceRepository for MapboxClient {
    async fn fetch_resource(
        &self,
        endpoint: &str,
        params: &HashMap<String, String>,
    ) -> Result<serde_json::Value, ServiceError> {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        let query = query_params(&self.token, params);

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| ServiceError::upstream(SERVICE, e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::upstream(
                SERVICE,
                format!("{url} returned {status}: {body}"),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ServiceError::upstream(SERVICE, format!("invalid response body: {e}")))
    }
}
