use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::CompletionError;

/// Primitive type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

/// Flat output schema for structured completions: field names plus
/// primitive types, the shape the analyst screens request predictions in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseSchema {
    pub fields: Vec<SchemaField>,
}

impl ResponseSchema {
    pub fn new(fields: Vec<SchemaField>) -> Self {
        Self { fields }
    }

    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(SchemaField { name: name.into(), kind, required: true });
        self
    }

    /// Check a structured response against this schema: a JSON object
    /// with every required field present and primitively typed as
    /// declared. Extra fields are tolerated.
    pub fn conforms(&self, value: &Value) -> Result<(), CompletionError> {
        let object = value.as_object().ok_or_else(|| {
            CompletionError::InvalidArgument("structured response is not an object".to_string())
        })?;

        for field in &self.fields {
            match object.get(&field.name) {
                None if field.required => {
                    return Err(CompletionError::InvalidArgument(format!(
                        "missing required field: {}",
                        field.name
                    )));
                }
                None => {}
                Some(v) => {
                    let ok = match field.kind {
                        FieldKind::String => v.is_string(),
                        FieldKind::Number => v.is_number(),
                        FieldKind::Boolean => v.is_boolean(),
                    };
                    if !ok {
                        return Err(CompletionError::InvalidArgument(format!(
                            "field {} has wrong type",
                            field.name
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// A single completion call: free-text prompt, optionally constrained to
/// a structured output shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub prompt: String,
    #[serde(default)]
    pub schema: Option<ResponseSchema>,
}

impl CompletionRequest {
    /// Free-text completion.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), schema: None }
    }

    /// Structured completion constrained to `schema`.
    pub fn structured(prompt: impl Into<String>, schema: ResponseSchema) -> Self {
        Self { prompt: prompt.into(), schema: Some(schema) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompletionResponse {
    Text(String),
    Structured(Value),
}

/// The opaque completion capability the analyst screens depend on.
/// Implementations wrap a concrete provider; tests use a canned one.
pub trait CompletionService {
    fn complete(&self, request: &CompletionRequest)
        -> Result<CompletionResponse, CompletionError>;
}
