//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::UserRepository;
use crate::infrastructure::user::UserService;

/// Application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    /// Direct store handle for health checks, bypassing service metrics
    pub user_store: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(user_store: Arc<dyn UserRepository>) -> Self {
        Self {
            user_service: UserService::new(user_store.clone()),
            user_store,
        }
    }
}
