use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use course_redundancy::application::services::RedundancyService;
use course_redundancy::infrastructure::llm::EmbedderFactory;
use course_redundancy::infrastructure::observability::{TracingConfig, init_tracing};
use course_redundancy::infrastructure::spreadsheet::CalamineReader;
use course_redundancy::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    // Loaded once before serving; shared read-only by every request.
    let embedder =
        EmbedderFactory::create(&settings.embeddings).context("Failed to create embedder")?;

    let redundancy_service = Arc::new(RedundancyService::new(Arc::new(CalamineReader), embedder));

    let state = AppState {
        redundancy_service,
        max_upload_bytes: settings.max_upload_bytes(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        address = %addr,
        environment = %environment,
        model = %settings.embeddings.model,
        "Listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
