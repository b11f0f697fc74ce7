use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed set of account roles.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    /// Stored representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Teacher => "TEACHER",
            Role::Student => "STUDENT",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub role: Role,
    pub student_id: Option<i32>,
    pub teacher_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Registration payload. `related_id` is the student id for `STUDENT` accounts and
/// the teacher id for `TEACHER` accounts; it is ignored for `ADMIN`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub related_id: Option<i32>,
}

/// Partial update. Absent fields are left unchanged; a new `role` relinks the account
/// using `related_id`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateUserDto {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub related_id: Option<i32>,
}
