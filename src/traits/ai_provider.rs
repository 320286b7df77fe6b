use async_trait::async_trait;
use crate::enums::analysis_error::AnalysisError;
use crate::structs::analysis_response::AnalysisResponse;
use crate::structs::encoded_document::EncodedDocument;

#[cfg(test)]
use mockall::automock;

/// The hosted model behind the analysis. One outbound call per invocation,
/// no retry, no local state.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    async fn analyze(
        &self,
        document: &EncodedDocument,
        job_description: &str,
    ) -> Result<AnalysisResponse, AnalysisError>;
}
