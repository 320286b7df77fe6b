pub mod analysis_error;
pub mod commands;
pub mod gemini_schema_type;
