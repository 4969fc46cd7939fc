// Service error taxonomy
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Network or HTTP failure talking to an external API
    #[error("upstream request to {service} failed: {detail}")]
    Upstream {
        service: &'static str,
        detail: String,
    },

    /// Malformed drawing document rejected on save
    #[error("invalid drawing document: {0}")]
    Validation(String),

    /// File I/O failure, including a missing file on load
    #[error("drawing storage failed: {0}")]
    Storage(#[source] std::io::Error),

    /// Corrupt persisted JSON
    #[error("stored drawing document is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

impl ServiceError {
    pub fn upstream(service: &'static str, detail: impl Into<String>) -> Self {
        Self::Upstream {
            service,
            detail: detail.into(),
        }
    }
}
