// HTTP boundary error mapping
use crate::domain::error::ServiceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Handler-level error wrapper. The full error detail is logged server-side;
/// the client only ever sees the generic message and status below.
#[derive(Debug)]
pub struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        Self(error)
    }
}

fn status_and_message(error: &ServiceError) -> (StatusCode, &'static str) {
    match error {
        ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, "invalid drawing data"),
        ServiceError::Upstream { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "error fetching upstream data",
        ),
        ServiceError::Storage(_) | ServiceError::Parse(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "error accessing saved drawings",
        ),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        tracing::error!("request failed: {}", self.0);
        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let (status, message) =
            status_and_message(&ServiceError::Validation("bad shape".to_string()));

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!message.contains("bad shape"));
    }

    #[test]
    fn test_upstream_maps_to_internal_error_with_generic_body() {
        let (status, message) = status_and_message(&ServiceError::upstream(
            "traccar",
            "401 unauthorized for user admin",
        ));

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!message.contains("admin"));
    }

    #[test]
    fn test_storage_and_parse_map_to_internal_error() {
        let storage = ServiceError::Storage(std::io::Error::from(std::io::ErrorKind::NotFound));
        let parse =
            ServiceError::Parse(serde_json::from_str::<serde_json::Value>("{").unwrap_err());

        assert_eq!(status_and_message(&storage).0, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_and_message(&parse).0, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
