use serde::{Deserialize, Serialize};
use crate::structs::analysis_result::AnalysisResult;

/// An analysis result tagged with the originally uploaded file's display
/// name, as persisted in the history list.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub file_name: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}
