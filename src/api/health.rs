use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::{
    domain::{ApplianceSelection, BhkCategory},
    estimator,
};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: chrono::DateTime<chrono::Utc>,
    checks: HealthChecks,
}

/// Individual health checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    engine: ComponentHealth,
}

/// Health status of a component
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ComponentHealth {
    fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            error: None,
        }
    }

    fn unhealthy(error: String) -> Self {
        Self {
            status: "unhealthy".to_string(),
            error: Some(error),
        }
    }
}

/// GET /health - Health check endpoint
///
/// Runs a known scenario through the engine and verifies the result
pub async fn health_check() -> impl IntoResponse {
    let engine_health = check_engine();
    let all_healthy = engine_health.status == "healthy";

    let response = HealthResponse {
        status: if all_healthy {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        timestamp: chrono::Utc::now(),
        checks: HealthChecks {
            engine: engine_health,
        },
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}

/// Run the 1BHK no-appliance scenario and verify its known total
fn check_engine() -> ComponentHealth {
    let breakdown = estimator::compute_breakdown(BhkCategory::One, ApplianceSelection::none());
    let total = breakdown.total_kw();
    if (total - 2.4).abs() < 1e-9 {
        ComponentHealth::healthy()
    } else {
        ComponentHealth::unhealthy(format!("engine self-check returned {total} kW, expected 2.4"))
    }
}

/// GET /health/ready - Readiness probe for Kubernetes
///
/// Returns 200 if the application is ready to serve traffic
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /health/live - Liveness probe for Kubernetes
///
/// Returns 200 if the application is running
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_health_healthy() {
        let health = ComponentHealth::healthy();
        assert_eq!(health.status, "healthy");
        assert!(health.error.is_none());
    }

    #[test]
    fn test_component_health_unhealthy() {
        let health = ComponentHealth::unhealthy("self-check failed".to_string());
        assert_eq!(health.status, "unhealthy");
        assert_eq!(health.error, Some("self-check failed".to_string()));
    }

    #[test]
    fn test_engine_self_check_passes() {
        assert_eq!(check_engine().status, "healthy");
    }
}
