use std::sync::Arc;
use crate::enums::analysis_error::AnalysisError;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::encoded_document::EncodedDocument;
use crate::traits::ai_provider::AiProvider;

/// Runs one provider call over validated inputs and stamps the verdict with
/// an id and timestamp. Persistence is the caller's concern.
pub struct ResumeAnalyzer {
    provider: Arc<dyn AiProvider>,
}

impl ResumeAnalyzer {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    pub async fn analyze(
        &self,
        document: &EncodedDocument,
        job_description: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        if document.data.is_empty() || job_description.trim().is_empty() {
            return Err(AnalysisError::InvalidInput(
                "Please provide both a resume and a job description.".to_string(),
            ));
        }

        let analysis = self.provider.analyze(document, job_description).await?;

        Ok(AnalysisResult::from_response(analysis))
    }
}
