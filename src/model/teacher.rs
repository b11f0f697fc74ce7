use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TeacherDto {
    pub id: i32,
    pub last_name: String,
    pub name: String,
    pub middle_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
}

/// Payload for creating or replacing a teacher.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateTeacherDto {
    pub last_name: String,
    pub name: String,
    pub middle_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
}
