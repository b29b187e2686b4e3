use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream;

use crate::application::ports::{
    DocumentAnalyzer, DocumentAnalyzerError, ExtractedText, FileLoader, FileLoaderError,
    StagingStore, StagingStoreError, TextCompletionClient,
};
use crate::domain::{Document, StoragePath};

/// Orchestrates the three analysis paths: disk-staged contract review,
/// in-memory PDF comparison, and free-text queries. Each path invokes
/// exactly one provider.
pub struct AnalysisService<F, A, C>
where
    F: FileLoader,
    A: DocumentAnalyzer,
    C: TextCompletionClient,
{
    file_loader: Arc<F>,
    document_analyzer: Arc<A>,
    completion_client: Arc<C>,
    staging_store: Arc<dyn StagingStore>,
}

impl<F, A, C> AnalysisService<F, A, C>
where
    F: FileLoader,
    A: DocumentAnalyzer,
    C: TextCompletionClient,
{
    pub fn new(
        file_loader: Arc<F>,
        document_analyzer: Arc<A>,
        completion_client: Arc<C>,
        staging_store: Arc<dyn StagingStore>,
    ) -> Self {
        Self {
            file_loader,
            document_analyzer,
            completion_client,
            staging_store,
        }
    }

    /// Stages the uploaded contract to disk, runs the document-analysis
    /// provider against it, and deletes the staged artifact regardless of
    /// the provider outcome. The artifact never outlives this call.
    #[tracing::instrument(
        skip(self, data),
        fields(document_id = %document.id, filename = %document.filename)
    )]
    pub async fn review_contract(
        &self,
        document: &Document,
        data: Bytes,
    ) -> Result<String, AnalysisError> {
        let path = StoragePath::new(&document.id, &document.filename);

        let byte_stream = Box::pin(stream::iter(vec![Ok::<Bytes, io::Error>(data)]));
        let staged_bytes = self
            .staging_store
            .store(&path, byte_stream, Some(document.size_bytes))
            .await?;
        tracing::debug!(staged_bytes, staging_path = %path, "Contract staged to disk");

        let result = self.analyze_staged(&path).await;

        if let Err(e) = self.staging_store.delete(&path).await {
            tracing::warn!(error = %e, staging_path = %path, "Failed to delete staged contract");
        }

        result
    }

    async fn analyze_staged(&self, path: &StoragePath) -> Result<String, AnalysisError> {
        let bytes = self.staging_store.fetch(path).await?;
        let analysis = self.document_analyzer.analyze(&bytes).await?;
        tracing::info!(analysis_chars = analysis.len(), "Contract analysis complete");
        Ok(analysis)
    }

    /// Extracts text from the in-memory PDF and asks the text-completion
    /// provider to compare it with current legislation. Extraction failures
    /// propagate; provider failures degrade to a fallback string inside the
    /// returned comparison.
    #[tracing::instrument(
        skip(self, data),
        fields(document_id = %document.id, filename = %document.filename)
    )]
    pub async fn compare_pdf(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<PdfComparison, AnalysisError> {
        let extracted = self.file_loader.extract_text(data, document).await?;
        tracing::debug!(
            page_count = extracted.page_count,
            text_chars = extracted.text.len(),
            "PDF text extracted"
        );

        let comparison = self
            .completion_client
            .compare_document_text(&extracted.text)
            .await;

        Ok(PdfComparison {
            extracted,
            comparison,
        })
    }

    /// Forwards a free-text query verbatim to the text-completion provider.
    /// Never fails; provider errors arrive as fallback strings.
    pub async fn answer_query(&self, query: &str) -> String {
        self.completion_client.answer_query(query).await
    }
}

#[derive(Debug, Clone)]
pub struct PdfComparison {
    pub extracted: ExtractedText,
    pub comparison: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("staging: {0}")]
    Staging(#[from] StagingStoreError),
    #[error("extraction: {0}")]
    Extraction(#[from] FileLoaderError),
    #[error("{0}")]
    Provider(#[from] DocumentAnalyzerError),
}
