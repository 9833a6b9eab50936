// Built-in validators

use crate::ValidationError;
use serde_json::{Map, Value};

/// Human-readable name of a field, used in messages
fn label(field: &str) -> &str {
    if field.is_empty() { "value" } else { field }
}

/// Name of the JSON type of a value
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(field: &str, expected: &str, value: &Value) -> ValidationError {
    ValidationError::new(
        field,
        format!(
            "{} must be {}, received {}",
            label(field),
            expected,
            kind_of(value)
        ),
    )
    .with_constraint("type")
}

// Presence validators

/// Validates that a value is present
pub struct Required;

impl Required {
    pub fn validate<'a>(value: Option<&'a Value>, field: &str) -> Result<&'a Value, ValidationError> {
        value.ok_or_else(|| {
            ValidationError::new(field, format!("{} is required", label(field)))
                .with_constraint("required")
        })
    }
}

// Type validators

/// Validates that a value is a string
pub struct IsString;

impl IsString {
    pub fn validate<'a>(value: &'a Value, field: &str) -> Result<&'a str, ValidationError> {
        value
            .as_str()
            .ok_or_else(|| mismatch(field, "a string", value))
    }
}

/// Validates that a value is a boolean
pub struct IsBoolean;

impl IsBoolean {
    pub fn validate(value: &Value, field: &str) -> Result<bool, ValidationError> {
        value
            .as_bool()
            .ok_or_else(|| mismatch(field, "a boolean", value))
    }
}

/// Validates that a value is an object
pub struct IsObject;

impl IsObject {
    pub fn validate<'a>(
        value: &'a Value,
        field: &str,
    ) -> Result<&'a Map<String, Value>, ValidationError> {
        value
            .as_object()
            .ok_or_else(|| mismatch(field, "an object", value))
    }
}

// String validators

/// Validates minimum string length, counted in UTF-16 code units
pub struct MinLength(pub usize);

impl MinLength {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        if value.encode_utf16().count() < self.0 {
            Err(ValidationError::new(
                field,
                format!("{} must be at least {} characters", label(field), self.0),
            )
            .with_constraint("minLength")
            .with_value(value.to_string()))
        } else {
            Ok(())
        }
    }
}
