//! Structural validation of processing request bodies.
//!
//! The required-field schema is a static descriptor table checked against
//! the parsed body before any file or image work starts. Extra fields are
//! ignored and no type coercion is performed: a number is never accepted
//! where a string is declared.

use crate::error::ApiError;

/// Wire name of the field carrying the image path. The space is part of the
/// published contract.
pub const IMAGE_PATH_FIELD: &str = "image path";

/// Types a declared field may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
}

impl FieldKind {
    fn name(self) -> &'static str {
        match self {
            FieldKind::String => "string",
        }
    }

    fn matches(self, value: &serde_json::Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
        }
    }
}

/// One declared field of a request schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// Schema for the processing endpoint: exactly one required string field.
pub const PROCESS_SCHEMA: &[FieldSpec] = &[FieldSpec {
    name: IMAGE_PATH_FIELD,
    kind: FieldKind::String,
    required: true,
}];

/// A processing request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRequest {
    /// Path of the image file to analyze, taken verbatim from the body.
    pub image_path: String,
    /// The parsed request object, retained because the metrics record keeps
    /// the payload of the last processed request.
    pub raw: serde_json::Value,
}

/// Validate a raw request body against [`PROCESS_SCHEMA`].
///
/// Parse failures (including bodies that parse but are not objects) map to
/// [`ApiError::MalformedInput`]; missing or mistyped declared fields map to
/// [`ApiError::SchemaViolation`].
pub fn validate_request(body: &[u8]) -> Result<ValidRequest, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::MalformedInput(format!("input is not valid JSON: {e}")))?;

    let object = value
        .as_object()
        .ok_or_else(|| ApiError::MalformedInput("input is not a JSON object".to_string()))?;

    for field in PROCESS_SCHEMA {
        match object.get(field.name) {
            None if field.required => {
                return Err(ApiError::SchemaViolation(format!(
                    "'{}' is a required property",
                    field.name
                )));
            }
            Some(found) if !field.kind.matches(found) => {
                return Err(ApiError::SchemaViolation(format!(
                    "'{}' must be a {}",
                    field.name,
                    field.kind.name()
                )));
            }
            _ => {}
        }
    }

    // The schema loop has already guaranteed presence and type.
    let image_path = object
        .get(IMAGE_PATH_FIELD)
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| {
            ApiError::SchemaViolation(format!("'{IMAGE_PATH_FIELD}' is a required property"))
        })?;

    Ok(ValidRequest {
        image_path,
        raw: value,
    })
}
