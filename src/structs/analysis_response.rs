use serde::{Deserialize, Serialize};

/// The schema-constrained assessment the model returns for one resume and
/// job-description pair. Field names mirror the declared response schema, so
/// the serialized form is identical to what the model produced. Scores are on
/// the model's declared 0-100 scale and are never clamped locally.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    pub resume_quality_score: f64,
    pub job_match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub alternative_roles: Vec<String>,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResponse {
        AnalysisResponse {
            job_title: None,
            resume_quality_score: 85.0,
            job_match_score: 72.0,
            matched_skills: vec!["Go".to_string()],
            missing_skills: vec!["Kubernetes".to_string()],
            suggestions: vec!["Add Kubernetes experience".to_string()],
            alternative_roles: vec!["Platform Engineer".to_string()],
            summary: "Strong backend fit, lacking container orchestration exposure.".to_string(),
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("resumeQualityScore"));
        assert!(object.contains_key("jobMatchScore"));
        assert!(object.contains_key("matchedSkills"));
        assert!(object.contains_key("missingSkills"));
        assert!(object.contains_key("alternativeRoles"));
        assert!(object.contains_key("suggestions"));
        assert!(object.contains_key("summary"));
    }

    #[test]
    fn omits_job_title_when_not_inferred() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("jobTitle").is_none());
    }

    #[test]
    fn parses_a_model_payload() {
        let payload = r#"{
            "jobTitle": "Senior Backend Engineer",
            "resumeQualityScore": 85,
            "jobMatchScore": 72,
            "matchedSkills": ["Go"],
            "missingSkills": ["Kubernetes"],
            "suggestions": ["Add Kubernetes experience"],
            "alternativeRoles": ["Platform Engineer"],
            "summary": "Strong backend fit, lacking container orchestration exposure."
        }"#;

        let parsed: AnalysisResponse = serde_json::from_str(payload).unwrap();

        assert_eq!(parsed.job_title.as_deref(), Some("Senior Backend Engineer"));
        assert_eq!(parsed.job_match_score, 72.0);
        assert_eq!(parsed.matched_skills, vec!["Go"]);
        assert_eq!(parsed.missing_skills, vec!["Kubernetes"]);
    }

    #[test]
    fn rejects_payloads_missing_required_fields() {
        let payload = r#"{"jobMatchScore": 72}"#;
        assert!(serde_json::from_str::<AnalysisResponse>(payload).is_err());
    }
}
