use async_trait::async_trait;

/// Text-completion provider. Unlike [`super::DocumentAnalyzer`] this port
/// never fails: provider errors and empty responses are folded into literal
/// fallback strings by the adapter, and callers receive them inside an
/// otherwise successful response.
#[async_trait]
pub trait TextCompletionClient: Send + Sync {
    /// Wraps extracted document text in a fixed compare-with-new-laws
    /// instruction and returns the completion.
    async fn compare_document_text(&self, document_text: &str) -> String;

    /// Sends a caller-supplied query verbatim and returns the completion.
    async fn answer_query(&self, query: &str) -> String;
}
