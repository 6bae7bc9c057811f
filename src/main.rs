mod config;
mod es;
mod handlers;
mod models;
mod templates;

use anyhow::Result;
use axum::{routing::get, Router};
use clap::Parser;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use handlers::AppState;

#[derive(Parser, Debug)]
#[command(name = "es-inventory")]
#[command(about = "Elasticsearch index inventory page", long_about = None)]
struct Args {
    /// Host pro HTTP server
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port pro HTTP server
    #[arg(short, long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Inicializuj logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "es_inventory=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI argumenty
    let args = Args::parse();

    tracing::info!("Starting ES Inventory...");

    // Načti konfiguraci clusteru z prostředí
    let params = config::ConnectionParams::from_env();
    if !params.is_complete() {
        tracing::warn!(
            "ELASTICSEARCH_ENDPOINT or ELASTICSEARCH_API_KEY not set, the page will show a configuration error"
        );
    }

    // Shared state
    let state = Arc::new(AppState { params });

    // Vytvoř axum router
    let app = Router::new()
        .route("/", get(handlers::indices::list_indices))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Adresa serveru
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    // Spusť server
    axum::serve(listener, app).await?;

    Ok(())
}
