//! Health check handler and response type.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Run an async check with timeout; returns "healthy", "timeout", or "{prefix}: {error}".
async fn run_check<F, E>(timeout: Duration, f: F, error_prefix: &str) -> String
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    match tokio::time::timeout(timeout, f).await {
        Ok(Ok(())) => "healthy".to_string(),
        Ok(Err(e)) => format!("{}: {}", error_prefix, e),
        Err(_) => "timeout".to_string(),
    }
}

#[derive(serde::Serialize)]
pub(super) struct HealthCheckResponse {
    pub status: String,
    pub storage: String,
    pub claims: String,
}

/// Checks that the upload subdirectories and the claims directory exist.
pub(super) async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    const TIMEOUT: Duration = Duration::from_secs(5);

    let storage = run_check(TIMEOUT, state.store.check_health(), "unhealthy").await;
    let claims = run_check(TIMEOUT, state.claims.check_health(), "unhealthy").await;

    let healthy = storage == "healthy" && claims == "healthy";
    if !healthy {
        tracing::error!(storage = %storage, claims = %claims, "Health check failed");
    }

    let response = HealthCheckResponse {
        status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        storage,
        claims,
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
