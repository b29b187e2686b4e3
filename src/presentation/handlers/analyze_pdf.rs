use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{DocumentAnalyzer, FileLoader, TextCompletionClient};
use crate::presentation::state::AppState;

use super::upload::{UploadError, read_file_field};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfAnalysisResponse {
    pub pdf_content: String,
    pub groq_response: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `POST /analyzepdf` — multipart field `pdf`. The upload stays in memory:
/// text is extracted locally, then compared against current legislation by
/// the text-completion provider. `pdfContent` always reflects the
/// extractor's output, independent of the provider outcome.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_pdf_handler<F, A, C>(
    State(state): State<AppState<F, A, C>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    A: DocumentAnalyzer + 'static,
    C: TextCompletionClient + 'static,
{
    let (document, data) = match read_file_field(&mut multipart, "pdf").await {
        Ok(upload) => upload,
        Err(UploadError::Missing) => {
            tracing::warn!("PDF analysis request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "PDF file is required.".to_string(),
                }),
            )
                .into_response();
        }
        Err(UploadError::Read(detail)) => {
            tracing::error!(error = %detail, "Failed to read PDF upload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "PDF file is required.".to_string(),
                }),
            )
                .into_response();
        }
    };

    match state.analysis_service.compare_pdf(&data, &document).await {
        Ok(comparison) => (
            StatusCode::OK,
            Json(PdfAnalysisResponse {
                pdf_content: comparison.extracted.text,
                groq_response: comparison.comparison,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, document_id = %document.id, "PDF analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Error analyzing the PDF.".to_string(),
                }),
            )
                .into_response()
        }
    }
}
