use thiserror::Error;

/// Every failure an analysis can surface. Input problems are caught before any
/// request is made; everything after the request collapses into the two
/// remaining buckets.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
