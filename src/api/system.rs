use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::warn;

use super::{ApiResponse, AppState, HealthDto};

pub async fn health(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<HealthDto>>) {
    match state.store().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(HealthDto {
                version: env!("CARGO_PKG_VERSION").to_string(),
                database: true,
                uptime_seconds: state.start_time.elapsed().as_secs(),
            })),
        ),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::error(format!("Database unavailable: {e}"))),
            )
        }
    }
}
