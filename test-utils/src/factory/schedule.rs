//! Schedule factory for creating test timetable entries.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating schedule entries with customizable date and times.
///
/// # Example
///
/// ```rust,ignore
/// let schedule = ScheduleFactory::new(&db, group.id, course.id, teacher.id, class_type.id)
///     .times(time(11, 0), time(12, 30))
///     .build()
///     .await?;
/// ```
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    group_id: i32,
    course_id: i32,
    teacher_id: i32,
    class_type_id: i32,
}

impl<'a> ScheduleFactory<'a> {
    /// Creates a new ScheduleFactory.
    ///
    /// Defaults:
    /// - date: `2025-09-01`
    /// - start_time: `09:00`
    /// - end_time: `10:30`
    pub fn new(
        db: &'a DatabaseConnection,
        group_id: i32,
        course_id: i32,
        teacher_id: i32,
        class_type_id: i32,
    ) -> Self {
        Self {
            db,
            date: default_date(),
            start_time: time(9, 0),
            end_time: time(10, 30),
            group_id,
            course_id,
            teacher_id,
            class_type_id,
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn times(mut self, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        entity::schedule::ActiveModel {
            date: ActiveValue::Set(self.date),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            group_id: ActiveValue::Set(self.group_id),
            course_id: ActiveValue::Set(self.course_id),
            teacher_id: ActiveValue::Set(self.teacher_id),
            class_type_id: ActiveValue::Set(self.class_type_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a 09:00-10:30 schedule entry on the default date.
pub async fn create_schedule(
    db: &DatabaseConnection,
    group_id: i32,
    course_id: i32,
    teacher_id: i32,
    class_type_id: i32,
) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db, group_id, course_id, teacher_id, class_type_id)
        .build()
        .await
}

/// Date used by schedule factories when none is given.
pub fn default_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

/// Shorthand for building a wall-clock time in tests.
pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}
