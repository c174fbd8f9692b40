use serde::Serialize;
use utoipa::ToSchema;

/// Plain confirmation or informational message returned by several routes.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message string into the response payload.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
