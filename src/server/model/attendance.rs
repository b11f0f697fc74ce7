//! Attendance domain models, parameters and listing filters.

use chrono::NaiveTime;

use crate::model::attendance::{AttendanceDto, AttendanceInfoDto, CreateAttendanceDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    pub id: i32,
    pub schedule_id: i32,
    pub student_id: i32,
    pub status_id: i32,
    pub marked_time: NaiveTime,
}

impl Attendance {
    pub fn from_entity(entity: entity::attendance::Model) -> Self {
        Self {
            id: entity.id,
            schedule_id: entity.schedule_id,
            student_id: entity.student_id,
            status_id: entity.status_id,
            marked_time: entity.marked_time,
        }
    }

    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            id: self.id,
            schedule_id: self.schedule_id,
            student_id: self.student_id,
            status_id: self.status_id,
            marked_time: self.marked_time,
        }
    }
}

/// Parameters for creating or replacing an attendance record.
///
/// A missing `marked_time` is filled with the current local time by the service.
#[derive(Debug, Clone)]
pub struct AttendanceParams {
    pub schedule_id: i32,
    pub student_id: i32,
    pub status_id: i32,
    pub marked_time: Option<NaiveTime>,
}

impl AttendanceParams {
    pub fn from_dto(dto: CreateAttendanceDto) -> Self {
        Self {
            schedule_id: dto.schedule_id,
            student_id: dto.student_id,
            status_id: dto.status_id,
            marked_time: dto.marked_time,
        }
    }
}

/// Restricts attendance listings. Every set field must match.
///
/// `teacher_id` matches records whose schedule entry is taught by that teacher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub schedule_id: Option<i32>,
    pub student_id: Option<i32>,
    pub status_id: Option<i32>,
    pub teacher_id: Option<i32>,
}

/// Attendance record with display names for its references.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceInfo {
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

impl AttendanceInfo {
    pub fn into_dto(self) -> AttendanceInfoDto {
        AttendanceInfoDto {
            id: self.id,
            student_name: self.student_name,
            group_name: self.group_name,
            teacher_name: self.teacher_name,
            status_name: self.status_name,
            marked_time: self.marked_time,
            start_time: self.start_time,
            end_time: self.end_time,
            course_name: self.course_name,
        }
    }
}
