// Traccar HTTP client, authenticated with HTTP Basic credentials
use crate::application::tracking_repository::TrackingRepository;
use crate::domain::error::ServiceError;
use crate::domain::tracker::{Device, Position};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

const SERVICE: &str = "traccar";

#[derive(Debug, Clone)]
pub struct TraccarClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl TraccarClient {
    pub fn new(base_url: String, username: String, password: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            password,
        }
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let url = self.endpoint_url(path);

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
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
            .json::<T>()
            .await
            .map_err(|e| ServiceError::upstream(SERVICE, format!("invalid response body: {e}")))
    }
}

#[async_trait]
impl TrackingRepository for TraccarClient {
    async fn fetch_positions(&self) -> Result<Vec<Position>, ServiceError> {
        self.get_json("api/positions").await
    }

    async fn fetch_devices(&self) -> Result<Vec<Device>, ServiceError> {
        self.get_json("api/devices").await
    }
}
