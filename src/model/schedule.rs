use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ScheduleDto {
    pub id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub group_id: i32,
    pub course_id: i32,
    pub teacher_id: i32,
    pub class_type_id: i32,
}

/// Payload for creating or replacing a schedule entry.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateScheduleDto {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub group_id: i32,
    pub course_id: i32,
    pub teacher_id: i32,
    pub class_type_id: i32,
}

/// Schedule entry with its references resolved to display names.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ScheduleInfoDto {
    pub id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub teacher_name: String,
    pub course_name: String,
    pub class_type_name: String,
    pub group_name: String,
}
