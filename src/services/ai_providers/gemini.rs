use std::collections::HashMap;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use crate::config::constants::{DEFAULT_GEMINI_MODEL, GEMINI_BASE_URL};
use crate::enums::analysis_error::AnalysisError;
use crate::prompts::analysis_prompt::analysis_prompt;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_part::GeminiPart;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_schema::GeminiSchema;
use crate::structs::analysis_response::AnalysisResponse;
use crate::structs::encoded_document::EncodedDocument;
use crate::traits::ai_provider::AiProvider;

// The declared output shape. Everything except jobTitle is required, so a
// reply that deserializes is already schema-valid.
static ANALYSIS_SCHEMA: Lazy<GeminiSchema> = Lazy::new(|| {
    let mut properties = HashMap::new();

    properties.insert(
        "resumeQualityScore".to_string(),
        GeminiSchema::number("A score from 0 to 100 indicating the overall quality, formatting, and clarity of the resume."),
    );
    properties.insert(
        "jobMatchScore".to_string(),
        GeminiSchema::number("A score from 0 to 100 indicating how well the resume matches the provided job description."),
    );
    properties.insert(
        "matchedSkills".to_string(),
        GeminiSchema::string_array("List of skills found in both the resume and the job description."),
    );
    properties.insert(
        "missingSkills".to_string(),
        GeminiSchema::string_array("List of important skills mentioned in the job description but missing from the resume."),
    );
    properties.insert(
        "suggestions".to_string(),
        GeminiSchema::string_array("Actionable suggestions to improve the resume for this specific job application."),
    );
    properties.insert(
        "alternativeRoles".to_string(),
        GeminiSchema::string_array("3-5 alternative job titles that this candidate might be a good fit for based on their resume."),
    );
    properties.insert(
        "summary".to_string(),
        GeminiSchema::string("A brief, professional summary of the analysis (max 2 sentences)."),
    );
    properties.insert(
        "jobTitle".to_string(),
        GeminiSchema::string("The likely job title being applied for, extracted from the job description."),
    );

    GeminiSchema::object(
        properties,
        vec![
            "resumeQualityScore".to_string(),
            "jobMatchScore".to_string(),
            "matchedSkills".to_string(),
            "missingSkills".to_string(),
            "suggestions".to_string(),
            "alternativeRoles".to_string(),
            "summary".to_string(),
        ],
    )
});

#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    temperature: Option<f64>,
    max_output_tokens: Option<u32>,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
            client: Client::new(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            temperature: None,
            max_output_tokens: None,
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    fn get_request(&self, document: &EncodedDocument, job_description: &str) -> GeminiRequest {
        let prompt = analysis_prompt(job_description);

        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![
                    GeminiPart::inline_data(document.media_type.clone(), document.data.clone()),
                    GeminiPart::text(prompt),
                ],
            }],
            generation_config: Some(GeminiGenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: ANALYSIS_SCHEMA.clone(),
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            }),
        }
    }

    async fn make_request(&self, url: String, request_body: GeminiRequest) -> Result<reqwest::Response, AnalysisError> {
        log::debug!("📦 Request model: {}", self.model);

        self.client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AnalysisError::RequestFailed(e.to_string()))
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn analyze(
        &self,
        document: &EncodedDocument,
        job_description: &str,
    ) -> Result<AnalysisResponse, AnalysisError> {
        let url = format!("{}/models/{}:generateContent?key={}",
                          self.base_url, self.model, self.api_key);
        let request_body = self.get_request(document, job_description);

        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status.as_u16() {
                400 => AnalysisError::RequestFailed(format!("Bad request: {}", error_text)),
                401 => AnalysisError::RequestFailed(format!("Authentication failed: {}", error_text)),
                403 => AnalysisError::RequestFailed(format!("Forbidden: {}", error_text)),
                429 => AnalysisError::RequestFailed(format!("Rate limit exceeded: {}", error_text)),
                _ => AnalysisError::RequestFailed(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let json: serde_json::Value = response.json().await
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

        let text = json
            .get("candidates")
            .and_then(|candidates| candidates.as_array())
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
            .and_then(|parts| parts.first())
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| AnalysisError::MalformedResponse("No response received from Gemini.".to_string()))?;

        serde_json::from_str::<AnalysisResponse>(text)
            .map_err(|e| AnalysisError::MalformedResponse(format!("Failed to parse analysis payload: {}", e)))
    }
}
