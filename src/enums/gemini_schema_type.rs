use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum GeminiSchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}
