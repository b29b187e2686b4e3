use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{DocumentAnalyzer, FileLoader, TextCompletionClient};
use crate::presentation::state::AppState;

use super::upload::{UploadError, read_file_field};

#[derive(Serialize)]
pub struct ContractAnalysisResponse {
    pub analysis: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `POST /analyzecontract` — multipart field `contract`. The upload is
/// staged to disk, analyzed by the document-analysis provider, and the
/// staged file is deleted whether or not the provider call succeeds.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_contract_handler<F, A, C>(
    State(state): State<AppState<F, A, C>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    A: DocumentAnalyzer + 'static,
    C: TextCompletionClient + 'static,
{
    let (document, data) = match read_file_field(&mut multipart, "contract").await {
        Ok(upload) => upload,
        Err(UploadError::Missing) => {
            tracing::warn!("Contract analysis request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(UploadError::Read(detail)) => {
            // A broken body means no usable file arrived; the transport
            // detail stays in the logs, not the response.
            tracing::error!(error = %detail, "Failed to read contract upload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
    };

    match state.analysis_service.review_contract(&document, data).await {
        Ok(analysis) => (
            StatusCode::OK,
            Json(ContractAnalysisResponse { analysis }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, document_id = %document.id, "Contract analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
