use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::enums::gemini_schema_type::GeminiSchemaType;

/// Declared response schema sent with a request so the model replies with
/// JSON of a fixed shape.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeminiSchema {
    #[serde(rename = "type")]
    pub schema_type: GeminiSchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, GeminiSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<GeminiSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl GeminiSchema {
    pub fn number(description: &str) -> Self {
        Self {
            schema_type: GeminiSchemaType::Number,
            description: Some(description.to_string()),
            properties: None,
            items: None,
            required: None,
        }
    }

    pub fn string(description: &str) -> Self {
        Self {
            schema_type: GeminiSchemaType::String,
            description: Some(description.to_string()),
            properties: None,
            items: None,
            required: None,
        }
    }

    pub fn string_array(description: &str) -> Self {
        let items = Self {
            schema_type: GeminiSchemaType::String,
            description: None,
            properties: None,
            items: None,
            required: None,
        };

        Self {
            schema_type: GeminiSchemaType::Array,
            description: Some(description.to_string()),
            properties: None,
            items: Some(Box::new(items)),
            required: None,
        }
    }

    pub fn object(properties: HashMap<String, GeminiSchema>, required: Vec<String>) -> Self {
        Self {
            schema_type: GeminiSchemaType::Object,
            description: None,
            properties: Some(properties),
            items: None,
            required: Some(required),
        }
    }
}
