use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use soawatch_domain::DomainError;

/// Plain-text error response: status code plus the error message as body.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_input_error() {
            return StatusCode::BAD_REQUEST;
        }

        match &self.0 {
            DomainError::TooManySessions => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.0.to_string()).into_response()
    }
}
