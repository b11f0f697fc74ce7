//! Attendance factory.

use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::schedule::time;

pub struct AttendanceFactory<'a> {
    db: &'a DatabaseConnection,
    schedule_id: i32,
    student_id: i32,
    status_id: i32,
    marked_time: NaiveTime,
}

impl<'a> AttendanceFactory<'a> {
    /// Defaults `marked_time` to `09:05`.
    pub fn new(db: &'a DatabaseConnection, schedule_id: i32, student_id: i32, status_id: i32) -> Self {
        Self {
            db,
            schedule_id,
            student_id,
            status_id,
            marked_time: time(9, 5),
        }
    }

    pub fn marked_time(mut self, marked_time: NaiveTime) -> Self {
        self.marked_time = marked_time;
        self
    }

    pub async fn build(self) -> Result<entity::attendance::Model, DbErr> {
        entity::attendance::ActiveModel {
            schedule_id: ActiveValue::Set(self.schedule_id),
            student_id: ActiveValue::Set(self.student_id),
            status_id: ActiveValue::Set(self.status_id),
            marked_time: ActiveValue::Set(self.marked_time),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_attendance(
    db: &DatabaseConnection,
    schedule_id: i32,
    student_id: i32,
    status_id: i32,
) -> Result<entity::attendance::Model, DbErr> {
    AttendanceFactory::new(db, schedule_id, student_id, status_id)
        .build()
        .await
}
