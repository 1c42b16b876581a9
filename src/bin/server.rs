//! colorsense HTTP server binary.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 8080)
//! - `OPENAI_API_KEY` — enables the OpenAI provider
//! - `GEMINI_API_KEY` (or `GOOGLE_API_KEY`) — enables the Gemini provider
//! - `RUST_LOG` — Tracing filter (default: "info")
//!
//! Without any key the service still runs: clients can exercise the full
//! pipeline through test mode.

use anyhow::Context;

use colorsense::server::app_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,colorsense=debug".into()),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{}", port);

    let app = app_router();

    tracing::info!("colorsense server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /api/health      — liveness probe");
    tracing::info!("  GET  /api/test-mode   — canned response kinds");
    tracing::info!("  POST /api/test-upload — canned analysis");
    tracing::info!("  POST /api/analyze     — photo upload and analysis");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    axum::serve(listener, app).await.context("server failed")?;

    Ok(())
}
