use async_trait::async_trait;

/// Multimodal document-analysis provider. One call per request, no retries;
/// failures propagate to the caller as typed errors.
#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    async fn analyze(&self, data: &[u8]) -> Result<String, DocumentAnalyzerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentAnalyzerError {
    /// Transport or API failure, carrying the underlying detail.
    #[error("analysis failed: {0}")]
    AnalysisFailed(String),
    /// The provider answered but the body was empty or malformed.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}
