use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fitcheck::config::Config;
use fitcheck::routes::build_router;
use fitcheck::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("fitcheck={0},tower_http={0}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting fitcheck API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        rules_dir = %config.rules_dir.display(),
        rules_ttl_secs = config.rules_ttl.as_secs(),
        trace_matching = config.trace_matching,
        "Configuration loaded"
    );

    let state = AppState::new(config.clone());
    info!("Resume scorer: {}", state.resume_scorer.backend());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
