use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{DocumentAnalyzer, FileLoader, TextCompletionClient};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeQueryRequest {
    // Option so an absent field reaches the handler as a validation failure
    // instead of a deserialization rejection.
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyzeQueryResponse {
    pub analysis: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `POST /analyze` — JSON `{"query": string}`. The query is forwarded to the
/// text-completion provider verbatim; provider failures come back as
/// fallback strings inside a 200, never as an error status.
#[tracing::instrument(skip(state, request))]
pub async fn analyze_query_handler<F, A, C>(
    State(state): State<AppState<F, A, C>>,
    Json(request): Json<AnalyzeQueryRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    A: DocumentAnalyzer + 'static,
    C: TextCompletionClient + 'static,
{
    let query = match request.query.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => q.to_string(),
        _ => {
            tracing::warn!("Query request with no query text");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Query text is required.".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(query = %sanitize_prompt(&query), "Processing query");

    let analysis = state.analysis_service.answer_query(&query).await;

    (StatusCode::OK, Json(AnalyzeQueryResponse { analysis })).into_response()
}
