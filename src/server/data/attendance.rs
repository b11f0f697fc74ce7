//! Attendance data repository.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::{
    model::attendance::{Attendance, AttendanceFilter, AttendanceInfo},
    util::name::full_name,
};

pub struct AttendanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttendanceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        schedule_id: i32,
        student_id: i32,
        status_id: i32,
        marked_time: chrono::NaiveTime,
    ) -> Result<Attendance, DbErr> {
        let entity = entity::attendance::ActiveModel {
            schedule_id: ActiveValue::Set(schedule_id),
            student_id: ActiveValue::Set(student_id),
            status_id: ActiveValue::Set(status_id),
            marked_time: ActiveValue::Set(marked_time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Attendance::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Attendance>, DbErr> {
        let entity = entity::prelude::Attendance::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Attendance::from_entity))
    }

    /// Finds the record for one student in one class, if any.
    pub async fn find_by_schedule_and_student(
        &self,
        schedule_id: i32,
        student_id: i32,
    ) -> Result<Option<Attendance>, DbErr> {
        let entity = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::ScheduleId.eq(schedule_id))
            .filter(entity::attendance::Column::StudentId.eq(student_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Attendance::from_entity))
    }

    /// Gets every record matching the filter, oldest first.
    pub async fn find_all(&self, filter: AttendanceFilter) -> Result<Vec<Attendance>, DbErr> {
        let entities = filtered(filter).all(self.db).await?;

        Ok(entities.into_iter().map(Attendance::from_entity).collect())
    }

    /// Gets one page of records matching the filter.
    ///
    /// # Returns
    /// - `Ok((records, total))` - Records on the requested page and total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn find_paginated(
        &self,
        filter: AttendanceFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Attendance>, u64), DbErr> {
        let paginator = filtered(filter).paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(Attendance::from_entity).collect(),
            total,
        ))
    }

    pub async fn update(
        &self,
        id: i32,
        schedule_id: i32,
        student_id: i32,
        status_id: i32,
        marked_time: chrono::NaiveTime,
    ) -> Result<Attendance, DbErr> {
        let entity = entity::attendance::ActiveModel {
            id: ActiveValue::Unchanged(id),
            schedule_id: ActiveValue::Set(schedule_id),
            student_id: ActiveValue::Set(student_id),
            status_id: ActiveValue::Set(status_id),
            marked_time: ActiveValue::Set(marked_time),
        }
        .update(self.db)
        .await?;

        Ok(Attendance::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Attendance::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Resolves student, group, teacher, status and course names for each record.
    ///
    /// Each referenced table is loaded once. Order of the input is preserved; a
    /// reference that no longer exists resolves to an empty name.
    pub async fn with_names(
        &self,
        records: Vec<Attendance>,
    ) -> Result<Vec<AttendanceInfo>, DbErr> {
        let student_ids: Vec<i32> = records.iter().map(|r| r.student_id).collect();
        let schedule_ids: Vec<i32> = records.iter().map(|r| r.schedule_id).collect();
        let status_ids: Vec<i32> = records.iter().map(|r| r.status_id).collect();

        let students: HashMap<i32, entity::student::Model> = entity::prelude::Student::find()
            .filter(entity::student::Column::Id.is_in(student_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();
        let schedules: HashMap<i32, entity::schedule::Model> = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::Id.is_in(schedule_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();
        let statuses: HashMap<i32, String> = entity::prelude::AttendanceStatus::find()
            .filter(entity::attendance_status::Column::Id.is_in(status_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        let group_ids: Vec<i32> = students.values().map(|s| s.group_id).collect();
        let teacher_ids: Vec<i32> = schedules.values().map(|s| s.teacher_id).collect();
        let course_ids: Vec<i32> = schedules.values().map(|s| s.course_id).collect();

        let groups: HashMap<i32, String> = entity::prelude::StudentGroup::find()
            .filter(entity::student_group::Column::Id.is_in(group_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|g| (g.id, g.name))
            .collect();
        let teachers: HashMap<i32, String> = entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::Id.is_in(teacher_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|t| {
                let name = full_name(&t.last_name, &t.name, t.middle_name.as_deref());
                (t.id, name)
            })
            .collect();
        let courses: HashMap<i32, String> = entity::prelude::Course::find()
            .filter(entity::course::Column::Id.is_in(course_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let lookup = |names: &HashMap<i32, String>, id: i32| {
            names.get(&id).cloned().unwrap_or_default()
        };

        Ok(records
            .into_iter()
            .map(|record| {
                let student = students.get(&record.student_id);
                let schedule = schedules.get(&record.schedule_id);

                AttendanceInfo {
                    id: record.id,
                    student_name: student
                        .map(|s| full_name(&s.last_name, &s.name, s.middle_name.as_deref()))
                        .unwrap_or_default(),
                    group_name: student
                        .map(|s| lookup(&groups, s.group_id))
                        .unwrap_or_default(),
                    teacher_name: schedule
                        .map(|s| lookup(&teachers, s.teacher_id))
                        .unwrap_or_default(),
                    status_name: lookup(&statuses, record.status_id),
                    marked_time: record.marked_time,
                    start_time: schedule.map(|s| s.start_time).unwrap_or_default(),
                    end_time: schedule.map(|s| s.end_time).unwrap_or_default(),
                    course_name: schedule
                        .map(|s| lookup(&courses, s.course_id))
                        .unwrap_or_default(),
                }
            })
            .collect())
    }
}

fn filtered(filter: AttendanceFilter) -> Select<entity::attendance::Entity> {
    let mut query = entity::prelude::Attendance::find();

    if let Some(schedule_id) = filter.schedule_id {
        query = query.filter(entity::attendance::Column::ScheduleId.eq(schedule_id));
    }
    if let Some(student_id) = filter.student_id {
        query = query.filter(entity::attendance::Column::StudentId.eq(student_id));
    }
    if let Some(status_id) = filter.status_id {
        query = query.filter(entity::attendance::Column::StatusId.eq(status_id));
    }
    if let Some(teacher_id) = filter.teacher_id {
        query = query
            .inner_join(entity::prelude::Schedule)
            .filter(entity::schedule::Column::TeacherId.eq(teacher_id));
    }

    query.order_by_asc(entity::attendance::Column::Id)
}
