use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

use crate::backend::BackendError;

#[derive(Debug, Display)]
pub enum PortalError {
    #[display(fmt = "{}", _0)]
    BadRequest(&'static str),

    #[display(fmt = "Invalid Credentials")]
    InvalidCredentials,

    #[display(fmt = "Not signed in")]
    Unauthenticated,

    #[display(fmt = "{} only", _0)]
    Forbidden(&'static str),

    #[display(fmt = "{}", _0)]
    Backend(BackendError),
}

impl std::error::Error for PortalError {}

impl From<BackendError> for PortalError {
    fn from(e: BackendError) -> Self {
        match e {
            BackendError::Unauthorized => PortalError::InvalidCredentials,
            other => PortalError::Backend(other),
        }
    }
}

impl ResponseError for PortalError {
    fn status_code(&self) -> StatusCode {
        match self {
            PortalError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PortalError::InvalidCredentials | PortalError::Unauthenticated => {
                StatusCode::UNAUTHORIZED
            }
            PortalError::Forbidden(_) => StatusCode::FORBIDDEN,
            PortalError::Backend(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_statuses() {
        assert_eq!(
            PortalError::from(BackendError::Unauthorized).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            PortalError::from(BackendError::Status(500)).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(PortalError::Forbidden("Admin").to_string(), "Admin only");
    }
}
