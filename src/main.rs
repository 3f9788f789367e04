use axum::{response::Json, routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod errors;
mod handlers;
mod models;
mod services;

use services::{PokemonService, DEFAULT_POKEAPI_BASE_URL};

#[derive(Clone)]
pub struct AppState {
    pub pokemon: PokemonService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pokedex_backend=info,tower_http=info")),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let base_url = std::env::var("POKEAPI_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_POKEAPI_BASE_URL.to_string());

    // One pooled client for the whole process; request handlers clone the
    // handle and drop it when they finish. The timeout bounds the outbound
    // call since PokeAPI has no SLA we control.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let state = AppState {
        pokemon: PokemonService::new(client, base_url),
    };

    let app = Router::new()
        .route("/api/health", get(health_check))
        .merge(handlers::pokemon::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state);

    // Server configuration
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .expect("PORT must be a valid number");

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;

    info!("🚀 Server starting on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "pokedex-backend",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "pokemon": "/pokemon/{name_or_id}",
            "health": "/api/health"
        }
    }))
}
