use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::structs::analysis_response::AnalysisResponse;

/// One completed analysis: the model's assessment stamped with a locally
/// generated identifier and receipt timestamp. Immutable once created.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AnalysisResult {
    pub id: String,
    pub date: String,
    #[serde(flatten)]
    pub analysis: AnalysisResponse,
}

impl AnalysisResult {
    pub fn from_response(analysis: AnalysisResponse) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            analysis,
        }
    }
}
