use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Json, Router, routing::get};
use http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::public::HealthResponse;
use super::routes;
use crate::api::state::AppState;
use crate::core::{
    AppConfig,
    db::{async_db, initialize_db},
};

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
    })
}

// Only the configured web client may make cross-origin requests
fn cors(frontend_url: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    match HeaderValue::from_str(frontend_url) {
        Ok(origin) => cors.allow_origin(origin),
        Err(err) => {
            tracing::warn!(
                "Invalid FRONTEND_URL {:?}, cross-origin requests are disabled: {}",
                frontend_url,
                err
            );
            cors
        }
    }
}

pub fn app(shared_state: Arc<AppState>) -> Router {
    let cors = cors(&shared_state.config.frontend_url);

    Router::new()
        .route("/health", get(health))
        // API routes
        .nest("/api", routes::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

// Run the server
pub async fn serve(host: String, port: String, config: AppConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format! {
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                }
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = async_db(&config.db_path)
        .await
        .with_context(|| format!("Failed to connect to db at {}", config.db_path))?;

    // Creating the schema is idempotent so a fresh store works
    // without running `init` first
    db.call(|conn| {
        initialize_db(conn)?;
        Ok(())
    })
    .await
    .context("Failed to initialize db")?;

    let app = app(Arc::new(AppState::new(db, config)));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;

    tracing::info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
