use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use config::{Config, File};
use config::Environment as EnvironmentSource;
use tokio::net::TcpListener;

use lexrelay::application::services::AnalysisService;
use lexrelay::infrastructure::llm::{GeminiDocumentClient, GroqCompletionClient};
use lexrelay::infrastructure::observability::{TracingConfig, init_tracing};
use lexrelay::infrastructure::storage::LocalStagingStore;
use lexrelay::infrastructure::text_processing::PdfAdapter;
use lexrelay::presentation::config::Environment;
use lexrelay::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;

    let configuration = Config::builder()
        .add_source(
            File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
        )
        .add_source(
            EnvironmentSource::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    let settings: Settings = configuration.try_deserialize()?;

    init_tracing(
        TracingConfig::new(
            environment.as_str(),
            &settings.logging.level,
            settings.logging.enable_json,
        ),
        settings.server.port,
    );

    // Provider clients and adapters live for the whole process; connections
    // are stateless per-call, so there is no teardown.
    let file_loader = Arc::new(PdfAdapter::new());
    let document_analyzer = Arc::new(GeminiDocumentClient::new(
        &settings.gemini.base_url,
        &settings.gemini.model,
        &settings.gemini.api_key,
    ));
    let completion_client = Arc::new(GroqCompletionClient::new(
        &settings.groq.base_url,
        &settings.groq.model,
        &settings.groq.api_key,
    ));
    let staging_store = Arc::new(LocalStagingStore::new(PathBuf::from(
        &settings.staging.directory,
    ))?);

    let analysis_service = Arc::new(AnalysisService::new(
        file_loader,
        document_analyzer,
        completion_client,
        staging_store,
    ));

    let state = AppState { analysis_service };

    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
