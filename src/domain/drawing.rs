// Drawing document domain model with shallow GeoJSON validation
use crate::domain::error::ServiceError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const FEATURE_COLLECTION: &str = "FeatureCollection";

/// The user's map drawings, a GeoJSON feature collection.
///
/// The document is kept as raw JSON so that whatever the client sent is
/// persisted and returned byte-for-byte equivalent. Only the outer shape is
/// checked: `type` must be the feature-collection tag and `features` must be
/// an array. Individual features are not inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawingDocument(Value);

impl DrawingDocument {
    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Wrap a raw JSON value read back from storage, skipping validation.
    pub fn from_stored(value: Value) -> Self {
        Self(value)
    }
}

impl TryFrom<Value> for DrawingDocument {
    type Error = ServiceError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value.get("type").and_then(Value::as_str) {
            Some(FEATURE_COLLECTION) => {}
            Some(other) => {
                return Err(ServiceError::Validation(format!(
                    "expected type \"{FEATURE_COLLECTION}\", got \"{other}\""
                )));
            }
            None => {
                return Err(ServiceError::Validation(
                    "missing or non-string type field".to_string(),
                ));
            }
        }

        if !value.get("features").is_some_and(Value::is_array) {
            return Err(ServiceError::Validation(
                "features field is missing or not an array".to_string(),
            ));
        }

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_empty_feature_collection() {
        let doc = DrawingDocument::try_from(json!({
            "type": "FeatureCollection",
            "features": []
        }));

        assert!(doc.is_ok());
    }

    #[test]
    fn test_accepts_extra_top_level_fields() {
        let value = json!({
            "type": "FeatureCollection",
            "features": [{"type": "Feature"}],
            "bbox": [0.0, 0.0, 1.0, 1.0]
        });

        let doc = DrawingDocument::try_from(value.clone()).unwrap();
        assert_eq!(doc.into_value(), value);
    }

    #[test]
    fn test_rejects_wrong_type_tag() {
        let result = DrawingDocument::try_from(json!({
            "type": "NotAFeatureCollection",
            "features": []
        }));

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn test_rejects_missing_features() {
        let result = DrawingDocument::try_from(json!({"type": "FeatureCollection"}));

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn test_rejects_non_array_features() {
        let result = DrawingDocument::try_from(json!({
            "type": "FeatureCollection",
            "features": {"not": "an array"}
        }));

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn test_rejects_non_object_body() {
        let result = DrawingDocument::try_from(json!([1, 2, 3]));

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
