use axum::{
    Router,
    http::HeaderValue,
    middleware,
    response::Redirect,
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::constants::routes;
use crate::state::SharedState;

mod assets;
mod error;
mod normalize;
mod observability;
pub mod orders;
mod system;
mod types;

pub use error::ApiError;
pub use types::*;

use crate::services::OrderService;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<RwLock<Config>> {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn order_service(&self) -> &Arc<dyn OrderService> {
        &self.shared.order_service
    }
}

pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub async fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().read().await.server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/", get(|| async { Redirect::to(routes::ORDER_FORM) }))
        .route(
            routes::ORDER_FORM,
            get(orders::order_form).post(orders::submit_order),
        )
        .route(routes::VIEW_ORDERS, get(orders::view_orders))
        .route(routes::NORMALIZE, get(normalize::normalize_page))
        .route("/static/{*path}", get(assets::serve_asset))
        .route("/api/health", get(system::health))
        .route("/metrics", get(observability::get_metrics))
        .with_state(state)
        .layer(middleware::from_fn(observability::security_headers_middleware))
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}
