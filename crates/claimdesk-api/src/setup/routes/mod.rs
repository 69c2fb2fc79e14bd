//! Route configuration and setup.
//!
//! Health checks live in [health](health).

mod health;

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use claimdesk_core::Config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let app = Router::new()
        .route("/", get(handlers::pages::index))
        .route("/admin", get(handlers::pages::admin))
        .route(
            "/submit_claim",
            post(handlers::claim_submit::submit_claim)
                // Multipart reads are capped here so an oversized body is
                // reported through the JSON error envelope as 413.
                .layer(DefaultBodyLimit::max(config.max_content_length_bytes)),
        )
        .route("/get_claim/{claim_id}", get(handlers::claim_get::get_claim))
        .route(
            "/download_file/{claim_id}/{filename}",
            get(handlers::attachment_download::download_file),
        )
        .route("/list_claims", get(handlers::claim_list::list_claims))
        .route("/health", get(health::health_check))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        if config.is_production() {
            tracing::warn!("CORS configured to allow all origins - not recommended for production");
        }
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}
