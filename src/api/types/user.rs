//! User request and response bodies

use serde::{Deserialize, Serialize};

use crate::infrastructure::user::UserRequest;

/// Body of create and update requests
///
/// Absent fields decode to empty values so that they fail field validation
/// instead of JSON decoding. Unknown fields, including a client-supplied
/// `id`, are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl From<UserPayload> for UserRequest {
    fn from(payload: UserPayload) -> Self {
        UserRequest::new(payload.name, payload.email, payload.age)
    }
}

/// Response of the count endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: usize,
}

/// Plain acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
