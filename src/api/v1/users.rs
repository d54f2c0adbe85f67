//! User endpoint handlers

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CountResponse, Json, MessageResponse, UserPayload};
use crate::domain::user::{User, UserId};
use crate::domain::DomainError;

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse::<UserId>().map_err(ApiError::from)
}

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    debug!(email = %payload.email, "Creating user");

    let user = state.user_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    debug!("Listing all users");

    let users = state.user_service.list().await?;

    Ok(Json(users))
}

/// GET /api/v1/users/count
pub async fn count_users(State(state): State<AppState>) -> Result<Json<CountResponse>, ApiError> {
    let count = state.user_service.count().await?;

    Ok(Json(CountResponse { count }))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_user_id(&id)?;

    let user = state.user_service.get(id).await?;

    Ok(Json(user))
}

/// PUT /api/v1/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>, ApiError> {
    let id = parse_user_id(&id)?;
    debug!(id = %id, "Updating user");

    let user = state.user_service.update(id, payload.into()).await?;

    Ok(Json(user))
}

/// DELETE /api/v1/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_user_id(&id)?;
    debug!(id = %id, "Deleting user");

    state.user_service.delete(id).await?;

    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// DELETE /api/v1/users/clear
pub async fn clear_users(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!("Clearing all users");

    state.user_service.clear().await?;

    Ok(Json(MessageResponse::new("All users cleared successfully")))
}

/// GET/PUT/DELETE on `count` or `clear` for a method that path does not serve.
///
/// The segment is read as a user id, so the answer matches `/users/{id}`.
pub async fn reject_reserved_id(uri: Uri) -> ApiError {
    let segment = uri.path().rsplit('/').next().unwrap_or_default();

    ApiError::from(DomainError::invalid_id(format!("Invalid user ID '{}'", segment)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("12").unwrap(), UserId::new(12));
    }

    #[test]
    fn test_parse_user_id_invalid() {
        let err = parse_user_id("abc").unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.param, Some("id".to_string()));
    }

    #[tokio::test]
    async fn test_reject_reserved_id() {
        let err = reject_reserved_id(Uri::from_static("/users/count")).await;

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.message, "Invalid user ID 'count'");
        assert_eq!(err.response.error.param, Some("id".to_string()));
    }
}
