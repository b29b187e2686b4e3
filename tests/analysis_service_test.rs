use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;

use lexrelay::application::ports::{
    DocumentAnalyzer, DocumentAnalyzerError, ExtractedText, FileLoader, FileLoaderError,
    StagingStore, StagingStoreError, TextCompletionClient,
};
use lexrelay::application::services::{AnalysisError, AnalysisService};
use lexrelay::domain::{Document, StoragePath};

/// Staging store that counts lifecycle calls so tests can verify the
/// delete-on-every-exit-path invariant.
#[derive(Default)]
struct CountingStagingStore {
    stores: AtomicUsize,
    deletes: AtomicUsize,
}

#[async_trait::async_trait]
impl StagingStore for CountingStagingStore {
    async fn store(
        &self,
        _path: &StoragePath,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
        _content_length: Option<u64>,
    ) -> Result<u64, StagingStoreError> {
        let mut total = 0u64;
        while let Some(chunk) = stream.next().await {
            total += chunk?.len() as u64;
        }
        self.stores.fetch_add(1, Ordering::SeqCst);
        Ok(total)
    }

    async fn fetch(&self, _path: &StoragePath) -> Result<Vec<u8>, StagingStoreError> {
        Ok(b"staged bytes".to_vec())
    }

    async fn delete(&self, _path: &StoragePath) -> Result<(), StagingStoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct EchoFileLoader;

#[async_trait::async_trait]
impl FileLoader for EchoFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        _document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        Ok(ExtractedText {
            text: String::from_utf8_lossy(data).into_owned(),
            page_count: 3,
        })
    }
}

struct OkAnalyzer;

#[async_trait::async_trait]
impl DocumentAnalyzer for OkAnalyzer {
    async fn analyze(&self, data: &[u8]) -> Result<String, DocumentAnalyzerError> {
        Ok(format!("analyzed {} bytes", data.len()))
    }
}

struct ErrAnalyzer;

#[async_trait::async_trait]
impl DocumentAnalyzer for ErrAnalyzer {
    async fn analyze(&self, _data: &[u8]) -> Result<String, DocumentAnalyzerError> {
        Err(DocumentAnalyzerError::InvalidResponse(
            "empty analysis".to_string(),
        ))
    }
}

struct RecordingCompletionClient;

#[async_trait::async_trait]
impl TextCompletionClient for RecordingCompletionClient {
    async fn compare_document_text(&self, document_text: &str) -> String {
        format!("compared:{}", document_text.len())
    }

    async fn answer_query(&self, query: &str) -> String {
        format!("answer:{query}")
    }
}

fn service_with<A: DocumentAnalyzer + 'static>(
    analyzer: A,
    staging: Arc<CountingStagingStore>,
) -> AnalysisService<EchoFileLoader, A, RecordingCompletionClient> {
    AnalysisService::new(
        Arc::new(EchoFileLoader),
        Arc::new(analyzer),
        Arc::new(RecordingCompletionClient),
        staging,
    )
}

fn test_document() -> Document {
    Document::new(
        "contract.pdf".to_string(),
        "application/pdf".to_string(),
        12,
    )
}

#[tokio::test]
async fn given_successful_analysis_when_reviewing_contract_then_artifact_deleted_once() {
    let staging = Arc::new(CountingStagingStore::default());
    let service = service_with(OkAnalyzer, Arc::clone(&staging));

    let analysis = service
        .review_contract(&test_document(), Bytes::from_static(b"%PDF-1.4"))
        .await
        .unwrap();

    assert_eq!(analysis, "analyzed 12 bytes");
    assert_eq!(staging.stores.load(Ordering::SeqCst), 1);
    assert_eq!(staging.deletes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_analyzer_failure_when_reviewing_contract_then_artifact_still_deleted_once() {
    let staging = Arc::new(CountingStagingStore::default());
    let service = service_with(ErrAnalyzer, Arc::clone(&staging));

    let result = service
        .review_contract(&test_document(), Bytes::from_static(b"%PDF-1.4"))
        .await;

    assert!(matches!(
        result,
        Err(AnalysisError::Provider(
            DocumentAnalyzerError::InvalidResponse(_)
        ))
    ));
    assert_eq!(staging.deletes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_pdf_bytes_when_comparing_then_extracted_text_is_returned_verbatim() {
    let staging = Arc::new(CountingStagingStore::default());
    let service = service_with(OkAnalyzer, staging);

    let comparison = service
        .compare_pdf(b"some legal text", &test_document())
        .await
        .unwrap();

    assert_eq!(comparison.extracted.text, "some legal text");
    assert_eq!(comparison.extracted.page_count, 3);
    assert_eq!(comparison.comparison, "compared:15");
}

#[tokio::test]
async fn given_pdf_comparison_when_running_then_no_disk_staging_happens() {
    let staging = Arc::new(CountingStagingStore::default());
    let service = service_with(OkAnalyzer, Arc::clone(&staging));

    service
        .compare_pdf(b"in-memory only", &test_document())
        .await
        .unwrap();

    assert_eq!(staging.stores.load(Ordering::SeqCst), 0);
    assert_eq!(staging.deletes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_query_when_answering_then_completion_client_receives_it_verbatim() {
    let staging = Arc::new(CountingStagingStore::default());
    let service = service_with(OkAnalyzer, staging);

    let answer = service.answer_query("define force majeure").await;

    assert_eq!(answer, "answer:define force majeure");
}
