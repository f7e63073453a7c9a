mod analysis;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::prompts::{ANALYSIS_TEMPERATURE, RECRUITER_SYSTEM_INSTRUCTION};
use crate::config::Config;
use crate::llm_client::{GeminiClient, GeminiOptions};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create upload directory '{}'",
                config.upload_dir.display()
            )
        })?;
    info!("Upload directory: {}", config.upload_dir.display());

    // Initialize LLM client
    let llm = GeminiClient::new(GeminiOptions {
        api_key: config.google_api_key.clone(),
        model: config.gemini_model.clone(),
        base_url: config.gemini_api_base.clone(),
        system_instruction: RECRUITER_SYSTEM_INSTRUCTION.to_string(),
        temperature: ANALYSIS_TEMPERATURE,
        timeout: config.llm_timeout,
    })
    .context("Failed to build LLM HTTP client")?;
    info!(
        "LLM client initialized (endpoint: {}, timeout: {}s)",
        llm.endpoint(),
        config.llm_timeout.as_secs()
    );

    let port = config.port;

    // Build app state
    let state = AppState {
        config: Arc::new(config),
        model: Arc::new(llm),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
