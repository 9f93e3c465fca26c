use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use echowell_types::api::MessageBody;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing required field or a body that does not parse.
    #[error("{0}")]
    Validation(String),

    #[error("User with this email already exists.")]
    EmailTaken,

    /// Unknown email and wrong password share this variant so responses
    /// cannot be used to probe for registered addresses.
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Message is required")]
    MessageRequired,

    #[error("Internal server error.")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::EmailTaken | ApiError::MessageRequired => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::Internal(e) => error!("Request failed: {:#}", e),
            // The message board answers in plain text.
            ApiError::MessageRequired => return (status, self.to_string()).into_response(),
            _ => {}
        }

        (status, Json(MessageBody::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::EmailTaken.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MessageRequired.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("disk full")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_error_hides_cause() {
        let err = ApiError::Internal(anyhow::anyhow!("disk full"));
        assert_eq!(err.to_string(), "Internal server error.");
    }
}
