//! Schedule data repository.
//!
//! Queries are ordered chronologically (date, then start time). Overlap detection is
//! not done in SQL: `find_by_subject_on_date` returns one subject's entries for a day
//! and the conflict checker compares them in memory.

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::{
    model::schedule::{Schedule, ScheduleInfo, ScheduleParams, ScheduleSubject},
    util::name::full_name,
};

pub struct ScheduleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScheduleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ScheduleParams) -> Result<Schedule, DbErr> {
        let entity = entity::schedule::ActiveModel {
            date: ActiveValue::Set(params.date),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            group_id: ActiveValue::Set(params.group_id),
            course_id: ActiveValue::Set(params.course_id),
            teacher_id: ActiveValue::Set(params.teacher_id),
            class_type_id: ActiveValue::Set(params.class_type_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Schedule::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Schedule>, DbErr> {
        let entity = entity::prelude::Schedule::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Schedule::from_entity))
    }

    /// Gets every entry occupying the subject's timeline on `date`.
    ///
    /// # Arguments
    /// - `subject` - Teacher or group whose entries to load
    /// - `date` - Day to load
    ///
    /// # Returns
    /// - `Ok(Vec<Schedule>)` - Entries for that subject and day, ordered by start time
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_subject_on_date(
        &self,
        subject: ScheduleSubject,
        date: NaiveDate,
    ) -> Result<Vec<Schedule>, DbErr> {
        let query = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::Date.eq(date));

        let query = match subject {
            ScheduleSubject::Teacher(id) => {
                query.filter(entity::schedule::Column::TeacherId.eq(id))
            }
            ScheduleSubject::Group(id) => query.filter(entity::schedule::Column::GroupId.eq(id)),
        };

        let entities = query
            .order_by_asc(entity::schedule::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Schedule::from_entity).collect())
    }

    pub async fn find_by_group(&self, group_id: i32) -> Result<Vec<Schedule>, DbErr> {
        self.all(chronological().filter(entity::schedule::Column::GroupId.eq(group_id)))
            .await
    }

    pub async fn find_by_teacher(&self, teacher_id: i32) -> Result<Vec<Schedule>, DbErr> {
        self.all(chronological().filter(entity::schedule::Column::TeacherId.eq(teacher_id)))
            .await
    }

    pub async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Schedule>, DbErr> {
        self.all(chronological().filter(entity::schedule::Column::Date.eq(date)))
            .await
    }

    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Schedule>, u64), DbErr> {
        self.paginated(chronological(), page, per_page).await
    }

    pub async fn find_by_group_paginated(
        &self,
        group_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Schedule>, u64), DbErr> {
        self.paginated(
            chronological().filter(entity::schedule::Column::GroupId.eq(group_id)),
            page,
            per_page,
        )
        .await
    }

    pub async fn find_by_teacher_paginated(
        &self,
        teacher_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Schedule>, u64), DbErr> {
        self.paginated(
            chronological().filter(entity::schedule::Column::TeacherId.eq(teacher_id)),
            page,
            per_page,
        )
        .await
    }

    pub async fn update(&self, id: i32, params: ScheduleParams) -> Result<Schedule, DbErr> {
        let entity = entity::schedule::ActiveModel {
            id: ActiveValue::Unchanged(id),
            date: ActiveValue::Set(params.date),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            group_id: ActiveValue::Set(params.group_id),
            course_id: ActiveValue::Set(params.course_id),
            teacher_id: ActiveValue::Set(params.teacher_id),
            class_type_id: ActiveValue::Set(params.class_type_id),
        }
        .update(self.db)
        .await?;

        Ok(Schedule::from_entity(entity))
    }

    /// Deletes an entry. Its attendance records cascade with it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Schedule::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Resolves teacher, course, class type and group names for each entry.
    ///
    /// Loads each referenced table once with an `IN` query rather than per entry.
    /// Order of the input is preserved; a reference that no longer exists resolves
    /// to an empty name.
    pub async fn with_names(&self, schedules: Vec<Schedule>) -> Result<Vec<ScheduleInfo>, DbErr> {
        let teacher_ids: Vec<i32> = schedules.iter().map(|s| s.teacher_id).collect();
        let course_ids: Vec<i32> = schedules.iter().map(|s| s.course_id).collect();
        let class_type_ids: Vec<i32> = schedules.iter().map(|s| s.class_type_id).collect();
        let group_ids: Vec<i32> = schedules.iter().map(|s| s.group_id).collect();

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
        let class_types: HashMap<i32, String> = entity::prelude::ClassType::find()
            .filter(entity::class_type::Column::Id.is_in(class_type_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();
        let groups: HashMap<i32, String> = entity::prelude::StudentGroup::find()
            .filter(entity::student_group::Column::Id.is_in(group_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|g| (g.id, g.name))
            .collect();

        let lookup = |names: &HashMap<i32, String>, id: i32| {
            names.get(&id).cloned().unwrap_or_default()
        };

        Ok(schedules
            .into_iter()
            .map(|s| ScheduleInfo {
                id: s.id,
                date: s.date,
                start_time: s.start_time,
                end_time: s.end_time,
                teacher_name: lookup(&teachers, s.teacher_id),
                course_name: lookup(&courses, s.course_id),
                class_type_name: lookup(&class_types, s.class_type_id),
                group_name: lookup(&groups, s.group_id),
            })
            .collect())
    }

    async fn all(&self, query: Select<entity::schedule::Entity>) -> Result<Vec<Schedule>, DbErr> {
        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Schedule::from_entity).collect())
    }

    async fn paginated(
        &self,
        query: Select<entity::schedule::Entity>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Schedule>, u64), DbErr> {
        let paginator = query.paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Schedule::from_entity).collect(), total))
    }
}

fn chronological() -> Select<entity::schedule::Entity> {
    entity::prelude::Schedule::find()
        .order_by_asc(entity::schedule::Column::Date)
        .order_by_asc(entity::schedule::Column::StartTime)
}
