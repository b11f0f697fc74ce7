//! Schedule domain models and parameters.

use chrono::{NaiveDate, NaiveTime};

use crate::model::schedule::{CreateScheduleDto, ScheduleDto, ScheduleInfoDto};

/// One class in the timetable.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub group_id: i32,
    pub course_id: i32,
    pub teacher_id: i32,
    pub class_type_id: i32,
}

impl Schedule {
    pub fn from_entity(entity: entity::schedule::Model) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            start_time: entity.start_time,
            end_time: entity.end_time,
            group_id: entity.group_id,
            course_id: entity.course_id,
            teacher_id: entity.teacher_id,
            class_type_id: entity.class_type_id,
        }
    }

    pub fn into_dto(self) -> ScheduleDto {
        ScheduleDto {
            id: self.id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            group_id: self.group_id,
            course_id: self.course_id,
            teacher_id: self.teacher_id,
            class_type_id: self.class_type_id,
        }
    }
}

/// Parameters for creating or replacing a schedule entry.
#[derive(Debug, Clone)]
pub struct ScheduleParams {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub group_id: i32,
    pub course_id: i32,
    pub teacher_id: i32,
    pub class_type_id: i32,
}

impl ScheduleParams {
    pub fn from_dto(dto: CreateScheduleDto) -> Self {
        Self {
            date: dto.date,
            start_time: dto.start_time,
            end_time: dto.end_time,
            group_id: dto.group_id,
            course_id: dto.course_id,
            teacher_id: dto.teacher_id,
            class_type_id: dto.class_type_id,
        }
    }
}

/// Schedule entry with display names for its references.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleInfo {
    pub id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub teacher_name: String,
    pub course_name: String,
    pub class_type_name: String,
    pub group_name: String,
}

impl ScheduleInfo {
    pub fn into_dto(self) -> ScheduleInfoDto {
        ScheduleInfoDto {
            id: self.id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            teacher_name: self.teacher_name,
            course_name: self.course_name,
            class_type_name: self.class_type_name,
            group_name: self.group_name,
        }
    }
}

/// Timeline a schedule entry occupies: every entry blocks both its teacher and its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSubject {
    Teacher(i32),
    Group(i32),
}
