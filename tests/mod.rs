use std::fs;
use std::sync::Arc;
use async_trait::async_trait;
use resumatch_cli::config::constants::HISTORY_LIMIT;
use resumatch_cli::enums::analysis_error::AnalysisError;
use resumatch_cli::services::history_manager::HistoryManager;
use resumatch_cli::services::resume_analyzer::ResumeAnalyzer;
use resumatch_cli::structs::analysis_response::AnalysisResponse;
use resumatch_cli::structs::analysis_result::AnalysisResult;
use resumatch_cli::structs::encoded_document::EncodedDocument;
use resumatch_cli::structs::history_item::HistoryItem;
use resumatch_cli::traits::ai_provider::AiProvider;
use resumatch_cli::traits::history_store::HistoryStore;

struct StubProvider {
    response: AnalysisResponse,
}

#[async_trait]
impl AiProvider for StubProvider {
    async fn analyze(
        &self,
        _document: &EncodedDocument,
        _job_description: &str,
    ) -> Result<AnalysisResponse, AnalysisError> {
        Ok(self.response.clone())
    }
}

fn sample_document() -> EncodedDocument {
    EncodedDocument {
        file_name: "resume.pdf".to_string(),
        media_type: "application/pdf".to_string(),
        data: "aGVsbG8=".to_string(),
    }
}

fn sample_response() -> AnalysisResponse {
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

fn item_named(file_name: &str) -> HistoryItem {
    HistoryItem {
        file_name: file_name.to_string(),
        result: AnalysisResult::from_response(sample_response()),
    }
}

#[test]
fn history_round_trips_an_item() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryManager::with_path(dir.path().join("history.json"));

    let item = item_named("resume.pdf");
    store.write(&item);

    let items = store.read();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0], item);
}

#[test]
fn history_keeps_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryManager::with_path(dir.path().join("history.json"));

    store.write(&item_named("first.pdf"));
    store.write(&item_named("second.pdf"));
    store.write(&item_named("third.pdf"));

    let items = store.read();
    assert_eq!(items[0].file_name, "third.pdf");
    assert_eq!(items[1].file_name, "second.pdf");
    assert_eq!(items[2].file_name, "first.pdf");
}

#[test]
fn history_caps_at_the_limit_dropping_the_oldest() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryManager::with_path(dir.path().join("history.json"));

    for i in 0..=HISTORY_LIMIT {
        store.write(&item_named(&format!("resume-{}.pdf", i)));
    }

    let items = store.read();
    assert_eq!(items.len(), HISTORY_LIMIT);
    assert_eq!(items[0].file_name, format!("resume-{}.pdf", HISTORY_LIMIT));
    assert_eq!(items[HISTORY_LIMIT - 1].file_name, "resume-1.pdf");
}

#[test]
fn missing_history_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryManager::with_path(dir.path().join("history.json"));

    assert!(store.read().is_empty());
}

#[test]
fn corrupt_history_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, "{ not json").unwrap();

    let store = HistoryManager::with_path(path);
    assert!(store.read().is_empty());
}

#[test]
fn writing_over_a_corrupt_file_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, "{ not json").unwrap();

    let store = HistoryManager::with_path(path);
    let item = item_named("resume.pdf");
    store.write(&item);

    let items = store.read();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0], item);
}

#[test]
fn clear_removes_everything() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryManager::with_path(dir.path().join("history.json"));

    store.write(&item_named("resume.pdf"));
    store.clear();

    assert!(store.read().is_empty());
}

#[test]
fn clear_on_an_empty_store_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryManager::with_path(dir.path().join("history.json"));

    store.clear();
    assert!(store.read().is_empty());
}

#[test]
fn history_item_serializes_with_flattened_camel_case_keys() {
    let item = item_named("resume.pdf");
    let value = serde_json::to_value(&item).unwrap();
    let object = value.as_object().unwrap();

    assert!(object.contains_key("fileName"));
    assert!(object.contains_key("id"));
    assert!(object.contains_key("date"));
    assert!(object.contains_key("jobMatchScore"));
    assert!(object.contains_key("resumeQualityScore"));
    assert!(object.contains_key("matchedSkills"));
    assert!(!object.contains_key("jobTitle"));
    assert!(!object.contains_key("result"));
    assert!(!object.contains_key("analysis"));
}

#[tokio::test]
async fn analyzer_stamps_distinct_ids_per_run() {
    let analyzer = ResumeAnalyzer::new(Arc::new(StubProvider {
        response: sample_response(),
    }));

    let first = analyzer.analyze(&sample_document(), "Backend role").await.unwrap();
    let second = analyzer.analyze(&sample_document(), "Backend role").await.unwrap();

    assert_ne!(first.id, second.id);
    assert!(chrono::DateTime::parse_from_rfc3339(&first.date).is_ok());
}

#[tokio::test]
async fn analyzer_rejects_a_blank_job_description() {
    let analyzer = ResumeAnalyzer::new(Arc::new(StubProvider {
        response: sample_response(),
    }));

    let error = analyzer.analyze(&sample_document(), "").await.unwrap_err();

    assert!(matches!(error, AnalysisError::InvalidInput(_)));
    assert_eq!(
        error.to_string(),
        "Please provide both a resume and a job description."
    );
}

#[tokio::test]
async fn analyze_then_persist_keeps_the_verdict_intact() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryManager::with_path(dir.path().join("history.json"));

    let document = sample_document();
    let response = sample_response();

    let analyzer = ResumeAnalyzer::new(Arc::new(StubProvider {
        response: response.clone(),
    }));
    let result = analyzer
        .analyze(&document, "Senior Backend Engineer, Go, Kubernetes")
        .await
        .unwrap();

    assert!(!result.id.is_empty());
    assert_eq!(result.analysis, response);

    let item = HistoryItem {
        file_name: document.file_name.clone(),
        result,
    };
    store.write(&item);

    let items = store.read();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].file_name, "resume.pdf");
    assert_eq!(items[0], item);
    assert_eq!(items[0].result.analysis.job_match_score, 72.0);
    assert_eq!(items[0].result.analysis.resume_quality_score, 85.0);
    assert_eq!(items[0].result.analysis.matched_skills, vec!["Go"]);
    assert_eq!(items[0].result.analysis.missing_skills, vec!["Kubernetes"]);
}
