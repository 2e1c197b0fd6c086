use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use winewise_web::state::AppState;
use winewise_web::{handlers, sommelier};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app_state = match AppState::from_env() {
        Ok(state) => Arc::new(state),
        Err(e) => {
            eprintln!("Failed to initialize app state: {e}");
            std::process::exit(1);
        }
    };

    let app = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/wines", get(handlers::list_wines))
        .route("/api/wines/search", get(handlers::search_wines))
        .route("/api/wines/top", get(handlers::top_rated_wines))
        .route("/api/wines/countries", get(handlers::list_countries))
        .route("/api/wines/by-country", get(handlers::wines_by_country))
        .route("/api/wines/by-region", get(handlers::wines_by_region))
        .route("/api/cache/clear", post(handlers::clear_cache))
        .route(
            "/api/functions/analyze-wine-label",
            post(sommelier::analyze_wine_label),
        )
        .route("/api/functions/wine-pairing", post(sommelier::wine_pairing))
        .route("/api/functions/wine-recommend", post(sommelier::recommend_wine))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(3000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await.unwrap();

    tracing::info!("Server running on http://0.0.0.0:{port}");

    axum::serve(listener, app).await.unwrap();
}
