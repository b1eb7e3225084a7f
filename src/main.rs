//! Mindwell - risk triage API
//!
//! Serves the rule-based assessment path of the wellness companion's chat
//! assistant over HTTP.

use std::net::SocketAddr;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mindwell::config::Config;
use mindwell::core::AssessmentEngine;
use mindwell::routes::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mindwell=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let taxonomy = config.load_taxonomy()?;
    match &config.taxonomy_path {
        Some(path) => tracing::info!("Loaded keyword taxonomy from {}", path.display()),
        None => tracing::info!("Using builtin keyword taxonomy"),
    }

    let state = AppState::new(config, AssessmentEngine::new(taxonomy));

    let app = Router::new()
        .merge(routes::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("Mindwell API running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
