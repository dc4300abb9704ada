//! Flowstate HTTP server entry point.

use anyhow::Context;
use tracing::info;

use flowstate::config::FlowstateConfig;
use flowstate::logging::init_structured_logging;
use flowstate::orchestration::WorkflowService;
use flowstate::web::{self, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = FlowstateConfig::from_env().context("loading configuration")?;
    init_structured_logging(config.json_logs);

    let service = WorkflowService::new();
    let app = web::router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;

    info!(address = %listener.local_addr()?, "flowstate server listening");
    axum::serve(listener, app).await.context("serving HTTP")?;

    Ok(())
}
