use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{DocumentAnalyzer, FileLoader, TextCompletionClient};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_contract_handler, analyze_pdf_handler, analyze_query_handler, health_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<F, A, C>(state: AppState<F, A, C>) -> Router
where
    F: FileLoader + 'static,
    A: DocumentAnalyzer + 'static,
    C: TextCompletionClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/analyzecontract", post(analyze_contract_handler::<F, A, C>))
        .route("/analyzepdf", post(analyze_pdf_handler::<F, A, C>))
        .route("/analyze", post(analyze_query_handler::<F, A, C>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
