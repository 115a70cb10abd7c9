/**
 * Error Conversion
 *
 * Maps service-level errors into the HTTP taxonomy and renders
 * `ApiError` as a JSON response, so handlers can return errors with
 * `?` and never hand-roll status codes.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "EMAIL_EXISTS",
 *   "status": 400
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};

use crate::auth::service::{LoginError, SignupError, VerifyError};
use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<SignupError> for ApiError {
    fn from(err: SignupError) -> Self {
        match err {
            SignupError::MissingFields => ApiError::validation("MISSING_FIELDS"),
            SignupError::EmailExists => ApiError::conflict("EMAIL_EXISTS"),
            SignupError::Store(_) | SignupError::Password(_) => ApiError::Internal,
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::EmailNotFound => ApiError::authentication("EMAIL_NOT_FOUND"),
            LoginError::InvalidPassword => ApiError::authentication("INVALID_PASSWORD"),
            LoginError::Store(_) | LoginError::Password(_) | LoginError::Token(_) => {
                ApiError::Internal
            }
        }
    }
}

impl From<VerifyError> for ApiError {
    fn from(err: VerifyError) -> Self {
        match err {
            VerifyError::Missing => ApiError::authentication("No token provided"),
            VerifyError::Expired => ApiError::authentication("Token expired"),
            VerifyError::Invalid => ApiError::authentication("Invalid token"),
        }
    }
}
