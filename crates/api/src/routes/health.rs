//! Liveness endpoint for load balancers and uptime checks.
//!
//! Mounted at the root, outside `/api`, so uptime checks bypass CORS-sensitive
//! client paths.

use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answered, `degraded` otherwise.
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Round trip of `SELECT 1`; absent when the query failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_latency_ms: Option<u64>,
}

impl HealthResponse {
    /// Build the report from the outcome of a database round trip.
    pub fn from_db_check(latency: Option<Duration>) -> (StatusCode, Self) {
        let db_healthy = latency.is_some();
        let (code, status) = if db_healthy {
            (StatusCode::OK, "ok")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "degraded")
        };

        let report = HealthResponse {
            status,
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            db_latency_ms: latency.map(|d| d.as_millis() as u64),
        };
        (code, report)
    }
}

/// GET /health
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let started = Instant::now();
    let latency = match techvolt_db::health_check(&state.pool).await {
        Ok(()) => Some(started.elapsed()),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            None
        }
    };

    let (code, report) = HealthResponse::from_db_check(latency);
    (code, Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
