use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub name: String,
    pub lecture_count: i32,
    pub seminar_count: i32,
    pub lab_count: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateCourseDto {
    pub name: String,
    #[serde(default)]
    pub lecture_count: i32,
    #[serde(default)]
    pub seminar_count: i32,
    #[serde(default)]
    pub lab_count: i32,
}
