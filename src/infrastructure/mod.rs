//! Infrastructure layer - store implementation, logging and metrics

pub mod logging;
pub mod observability;
pub mod user;
