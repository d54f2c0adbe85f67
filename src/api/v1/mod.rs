//! Versioned user registry endpoints, mounted under `/api/v1`

pub mod users;

use axum::{
    routing::{delete, get},
    Router,
};

use super::state::AppState;

/// Create v1 API router
///
/// `count` and `clear` are static segments and win over `{id}`. The id
/// methods they don't serve still answer 400 for an invalid id.
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/count",
            get(users::count_users)
                .put(users::reject_reserved_id)
                .delete(users::reject_reserved_id),
        )
        .route(
            "/users/clear",
            delete(users::clear_users)
                .get(users::reject_reserved_id)
                .put(users::reject_reserved_id),
        )
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}
