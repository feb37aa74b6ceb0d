use serde_json::Value;

use crate::error::{ApiError, Result};

/// A required string field with inclusive length bounds, counted in chars.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub label: &'static str,
    pub max_len: usize,
}

impl FieldRule {
    pub const fn new(field: &'static str, label: &'static str, max_len: usize) -> Self {
        Self {
            field,
            label,
            max_len,
        }
    }

    fn check(&self, body: &serde_json::Map<String, Value>) -> Option<String> {
        match body.get(self.field) {
            None | Some(Value::Null) => Some(format!("{} is required", self.label)),
            Some(Value::String(s)) if s.is_empty() => {
                Some(format!("{} cannot be empty", self.label))
            }
            Some(Value::String(s)) if s.chars().count() > self.max_len => Some(format!(
                "{} cannot exceed {} characters",
                self.label, self.max_len
            )),
            Some(Value::String(_)) => None,
            Some(_) => Some(format!("{} must be a string", self.label)),
        }
    }
}

/// Checks every rule against a request body, collecting all failures into one message.
pub fn validate_fields(body: &Value, rules: &[FieldRule]) -> Result<()> {
    let object = body
        .as_object()
        .ok_or_else(|| ApiError::Validation("Request body must be a JSON object".to_string()))?;

    let errors: Vec<String> = rules.iter().filter_map(|rule| rule.check(object)).collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors.join(", ")))
    }
}

/// Parses a path segment as a database id. Non-numeric and non-positive values are rejected.
pub fn parse_entity_id(raw: &str, entity: &'static str) -> Result<i32> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::InvalidId(entity)),
    }
}
