use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The request was made without logging in, or the session expired.
    /// Results in a 401 Unauthorized response.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Happens when an account is deleted while its session is still alive.
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session was not found in the database")]
    UserNotInDatabase(i32),

    /// Username is unknown or the password does not match the stored hash.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The user is authenticated but the access policy denies the operation.
    ///
    /// # Fields
    /// - User id
    /// - Description of the denied operation, logged only
    #[error("User {0} was denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 with "Authentication required"
/// - `InvalidCredentials` → 401 with "Invalid username or password"
/// - `AccessDenied` → 403 with "Access denied"
///
/// Details are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
        };

        error_response(status, message)
    }
}
