//! Plain confirmation payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation body returned by delete endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Autor deletado com sucesso")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
