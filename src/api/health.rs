//! Health check endpoints for Kubernetes probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::api::types::Json;
use serde::Serialize;

use super::state::AppState;

/// Detailed health response with component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Simple health check - returns 200 if the service is running
/// Used for basic liveness probes
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check with dependency verification
/// Checks if the user store answers reads
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let store_check = check_user_store(&state).await;
    let overall_status = store_check.status;

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![store_check]),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    let status_code = match overall_status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check - simple check to verify the service is running
/// Used for Kubernetes liveness probes to detect crashes
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Ask the store directly so readiness polling stays out of the operation metrics
async fn check_user_store(state: &AppState) -> HealthCheck {
    let start = Instant::now();

    match state.user_store.count().await {
        Ok(count) => HealthCheck {
            name: "user_store".to_string(),
            status: HealthStatus::Healthy,
            message: Some(format!("{} users", count)),
            latency_ms: Some(start.elapsed().as_millis() as u64),
        },
        Err(e) => HealthCheck {
            name: "user_store".to_string(),
            status: HealthStatus::Unhealthy,
            message: Some(e.to_string()),
            latency_ms: Some(start.elapsed().as_millis() as u64),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::user::MockUserRepository;
    use crate::domain::DomainError;
    use crate::infrastructure::user::{InMemoryUserRepository, UserService};

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Unhealthy).unwrap(),
            "\"unhealthy\""
        );
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: HealthStatus::Healthy,
            version: "1.0.0".to_string(),
            checks: None,
            latency_ms: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"version\":\"1.0.0\""));
        assert!(!json.contains("checks"));
    }

    #[test]
    fn test_health_response_with_checks() {
        let response = HealthResponse {
            status: HealthStatus::Unhealthy,
            version: "1.0.0".to_string(),
            checks: Some(vec![HealthCheck {
                name: "user_store".to_string(),
                status: HealthStatus::Unhealthy,
                message: Some("Internal error: lock poisoned".to_string()),
                latency_ms: Some(5),
            }]),
            latency_ms: Some(5),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"unhealthy\""));
        assert!(json.contains("\"user_store\""));
        assert!(json.contains("lock poisoned"));
    }

    #[tokio::test]
    async fn test_check_user_store_healthy() {
        let state = AppState::new(Arc::new(InMemoryUserRepository::new()));

        let check = check_user_store(&state).await;

        assert!(check.status == HealthStatus::Healthy);
        assert_eq!(check.message.as_deref(), Some("0 users"));
    }

    #[tokio::test]
    async fn test_check_user_store_unhealthy() {
        let mut mock = MockUserRepository::new();
        mock.expect_count()
            .returning(|| Err(DomainError::internal("store unavailable")));
        let state = AppState::new(Arc::new(mock));

        let check = check_user_store(&state).await;

        assert!(check.status == HealthStatus::Unhealthy);
    }

    #[tokio::test]
    async fn test_check_user_store_skips_user_service() {
        // The service's repository has no expectations: any call through it panics.
        let mut store = MockUserRepository::new();
        store.expect_count().times(1).returning(|| Ok(7));
        let state = AppState {
            user_service: UserService::new(Arc::new(MockUserRepository::new())),
            user_store: Arc::new(store),
        };

        let check = check_user_store(&state).await;

        assert!(check.status == HealthStatus::Healthy);
        assert_eq!(check.message.as_deref(), Some("7 users"));
    }
}
