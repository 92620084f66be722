use serde_json::{Map, Value};

/// Parses a request body as a JSON object and checks required fields.
///
/// Fields are checked in the given order and the first absent one fails the
/// whole request; presence is the only condition, an empty-string value is
/// valid. Extra fields are returned untouched.
pub fn validate_payload(
    raw_body: &[u8],
    required_fields: &[&str],
) -> Result<Map<String, Value>, ValidationError> {
    let value: Value = serde_json::from_slice(raw_body)
        .map_err(|e| ValidationError::MalformedJson(e.to_string()))?;

    let Value::Object(payload) = value else {
        return Err(ValidationError::MalformedJson(
            "expected a JSON object".to_string(),
        ));
    };

    for field in required_fields {
        if !payload.contains_key(*field) {
            return Err(ValidationError::MissingField(field.to_string()));
        }
    }

    Ok(payload)
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid request format: {0}")]
    MalformedJson(String),
    #[error("Invalid request format: Missing required field: {0}")]
    MissingField(String),
}
