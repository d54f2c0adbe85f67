//! User infrastructure - in-memory store and user service

mod repository;
mod service;

pub use repository::{InMemoryUserRepository, DEFAULT_ID_SEED};
pub use service::{sample_users, UserRequest, UserService};
