use std::path::Path;
use base64::engine::general_purpose;
use base64::Engine as _;
use crate::config::constants::KNOWN_MEDIA_TYPES;
use crate::enums::analysis_error::AnalysisError;
use crate::structs::encoded_document::EncodedDocument;

pub struct FileEncoder;

impl FileEncoder {
    /// Reads a resume file and turns it into a transport-safe base64 payload
    /// plus its declared media type. Only PDF and text-like documents pass.
    pub async fn encode_file(path: &Path) -> Result<EncodedDocument, AnalysisError> {
        let media_type = Self::media_type_for(path)
            .filter(|media_type| Self::is_supported(media_type))
            .ok_or_else(|| {
                AnalysisError::InvalidInput("Please upload a PDF or Text file.".to_string())
            })?;

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AnalysisError::InvalidInput(format!("Cannot read resume file '{}': {}", path.display(), e))
        })?;

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("resume")
            .to_string();

        Ok(EncodedDocument {
            file_name,
            media_type: media_type.to_string(),
            data: Self::encode_bytes(&bytes),
        })
    }

    /// Base64 payload only, no data URI prefix.
    pub fn encode_bytes(bytes: &[u8]) -> String {
        general_purpose::STANDARD.encode(bytes)
    }

    pub fn media_type_for(path: &Path) -> Option<&'static str> {
        let extension = path.extension()?.to_str()?.to_lowercase();

        KNOWN_MEDIA_TYPES
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, media_type)| *media_type)
    }

    pub fn is_supported(media_type: &str) -> bool {
        media_type == "application/pdf" || media_type.starts_with("text/")
    }
}
