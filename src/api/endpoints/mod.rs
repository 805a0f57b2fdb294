pub mod appointments;
pub mod doctors;
pub mod patients;
pub mod symptoms;

use serde::Serialize;

use crate::api::error::ApiError;

/// Confirmation body returned by the DELETE handlers.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Unwrap a required request field or fail with a 422 naming it.
pub(crate) fn require_field<T>(value: Option<T>, name: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::Validation(format!("parameter {name} required")))
}
