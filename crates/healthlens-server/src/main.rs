use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use healthlens_bedrock::analysis::BedrockAnalyzer;
use healthlens_export::ReportRenderer;
use healthlens_export::styles::ReportLayout;
use healthlens_server::config::ServerConfig;
use healthlens_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    let client = healthlens_bedrock::client::build_client_with_region(&config.region).await;
    let analyzer = BedrockAnalyzer::new(client, config.model_id.clone());
    let renderer = ReportRenderer::new(ReportLayout::with_page_size(config.page_size))?;

    let state = AppState::new(Arc::new(analyzer), renderer);
    let app = healthlens_server::app(state, config.static_dir.as_deref());

    if config.lambda {
        tracing::info!(model = %config.model_id, "starting in lambda runtime");
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        model = %config.model_id,
        region = %config.region,
        "listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
