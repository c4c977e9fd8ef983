pub mod error;
pub mod health;
pub mod v1;

use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{config::Config, estimator::Tariff};

/// Shared handler state: just the configured tariff, cheap to clone
#[derive(Debug, Clone)]
pub struct AppState {
    pub tariff: Tariff,
}

impl AppState {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            tariff: Tariff::new(cfg.tariff.rate_per_kwh),
        }
    }
}

pub fn router(state: AppState, cfg: &Config) -> Router {
    let mut router = Router::new()
        .nest("/api/v1", v1::router(state))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .route("/health/ready", get(health::readiness_check));

    if cfg.server.enable_cors {
        use tower_http::cors::{Any, CorsLayer};
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE]);
        router = router.layer(cors);
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(64 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    cfg.server.request_timeout_secs,
                ))),
        )
        .layer(TraceLayer::new_for_http())
}
