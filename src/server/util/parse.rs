use crate::{
    model::user::Role,
    server::error::{internal::InternalError, AppError},
};

/// Parses a stored role string
///
/// # Arguments
/// - `value` - Stored role, one of `ADMIN`, `TEACHER` or `STUDENT`
///
/// # Returns
/// - `Ok(Role)` - Successfully parsed role
/// - `Err(AppError::InternalErr(ParseRole))` - Unknown role string
pub fn parse_role(value: &str) -> Result<Role, AppError> {
    match value {
        "ADMIN" => Ok(Role::Admin),
        "TEACHER" => Ok(Role::Teacher),
        "STUDENT" => Ok(Role::Student),
        other => Err(InternalError::ParseRole {
            value: other.to_string(),
        }
        .into()),
    }
}
