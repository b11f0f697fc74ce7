use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub last_name: String,
    pub name: String,
    pub middle_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub group_id: i32,
}

/// Payload for creating or replacing a student. Changing `group_id` on update
/// transfers the student.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateStudentDto {
    pub last_name: String,
    pub name: String,
    pub middle_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub group_id: i32,
}
