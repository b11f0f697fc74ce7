use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AttendanceDto {
    pub id: i32,
    pub schedule_id: i32,
    pub student_id: i32,
    pub status_id: i32,
    pub marked_time: NaiveTime,
}

/// Payload for creating or replacing an attendance record. `marked_time` defaults
/// to the server's current local time.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateAttendanceDto {
    pub schedule_id: i32,
    pub student_id: i32,
    pub status_id: i32,
    pub marked_time: Option<NaiveTime>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct MarkAttendanceDto {
    pub schedule_id: i32,
    pub student_id: i32,
    pub status_id: i32,
}

/// Marks every listed student with the same status. Either all records are written
/// or none are.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct MarkGroupAttendanceDto {
    pub schedule_id: i32,
    pub student_ids: Vec<i32>,
    pub status_id: i32,
}

/// Attendance record with its references resolved to display names.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AttendanceInfoDto {
    pub id: i32,
    pub student_name: String,
    pub group_name: String,
    pub teacher_name: String,
    pub status_name: String,
    pub marked_time: NaiveTime,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub course_name: String,
}
