use lexrelay::application::ports::{FileLoader, FileLoaderError};
use lexrelay::domain::Document;
use lexrelay::infrastructure::text_processing::PdfAdapter;

fn pdf_document(size: u64) -> Document {
    Document::new(
        "broken.pdf".to_string(),
        "application/pdf".to_string(),
        size,
    )
}

#[tokio::test]
async fn given_garbage_bytes_when_extracting_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();
    let data = b"this is definitely not a pdf";

    let result = adapter
        .extract_text(data, &pdf_document(data.len() as u64))
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_empty_bytes_when_extracting_then_returns_error() {
    let adapter = PdfAdapter::new();

    let result = adapter.extract_text(&[], &pdf_document(0)).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn given_truncated_pdf_header_when_extracting_then_returns_error() {
    let adapter = PdfAdapter::new();
    let data = b"%PDF-1.7\n";

    let result = adapter
        .extract_text(data, &pdf_document(data.len() as u64))
        .await;

    assert!(result.is_err());
}
