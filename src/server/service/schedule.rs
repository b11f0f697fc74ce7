pub mod conflict;

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        class_type::ClassTypeRepository, course::CourseRepository, group::GroupRepository,
        schedule::ScheduleRepository, teacher::TeacherRepository,
    },
    error::{domain::DomainError, AppError},
    model::{
        page::Paginated,
        schedule::{Schedule, ScheduleInfo, ScheduleParams},
    },
    service::schedule::conflict::{ConflictChecker, TimeSlot},
};

/// Timetable management. Writes resolve every reference, then check the group and
/// teacher timelines, then write, all on one transaction.
pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a schedule entry.
    ///
    /// # Returns
    /// - `Ok(Schedule)` - Created entry
    /// - `Err(DomainError::InvalidTimeRange)` - `start_time >= end_time`
    /// - `Err(DomainError::ReferenceNotFound)` - Group, course, teacher or class type missing
    /// - `Err(DomainError::ScheduleConflict(_))` - Group or teacher already busy
    pub async fn create(&self, params: ScheduleParams) -> Result<Schedule, AppError> {
        let slot = TimeSlot::new(params.date, params.start_time, params.end_time)?;

        let txn = self.db.begin().await?;

        resolve_references(&txn, &params).await?;
        ConflictChecker::new(&txn)
            .ensure_free(params.group_id, params.teacher_id, &slot, None)
            .await?;
        let schedule = ScheduleRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!(
            "Scheduled entry {} for group {} with teacher {} on {} {}-{}",
            schedule.id,
            schedule.group_id,
            schedule.teacher_id,
            schedule.date,
            schedule.start_time,
            schedule.end_time
        );

        Ok(schedule)
    }

    /// Replaces a schedule entry. The entry itself is excluded from the conflict
    /// check, so moving it within its own slot always succeeds.
    ///
    /// # Returns
    /// - `Ok(Schedule)` - Updated entry
    /// - `Err(DomainError::ReferenceNotFound)` - Entry or one of the new references missing
    /// - `Err(DomainError::ScheduleConflict(_))` - Another entry occupies the new slot
    pub async fn update(&self, id: i32, params: ScheduleParams) -> Result<Schedule, AppError> {
        let slot = TimeSlot::new(params.date, params.start_time, params.end_time)?;

        let txn = self.db.begin().await?;
        let repo = ScheduleRepository::new(&txn);

        if repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Schedule", id).into());
        }

        resolve_references(&txn, &params).await?;
        ConflictChecker::new(&txn)
            .ensure_free(params.group_id, params.teacher_id, &slot, Some(id))
            .await?;
        let schedule = repo.update(id, params).await?;

        txn.commit().await?;

        Ok(schedule)
    }

    /// Deletes an entry together with the attendance marked for it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ScheduleRepository::new(self.db).delete(id).await? {
            return Err(DomainError::not_found("Schedule", id).into());
        }

        tracing::info!("Deleted schedule entry {}", id);

        Ok(())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Schedule>, AppError> {
        Ok(ScheduleRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Schedule>, AppError> {
        let (schedules, total) = ScheduleRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(schedules, total, page, per_page))
    }

    pub async fn get_by_group(&self, group_id: i32) -> Result<Vec<Schedule>, AppError> {
        Ok(ScheduleRepository::new(self.db)
            .find_by_group(group_id)
            .await?)
    }

    pub async fn get_by_group_paginated(
        &self,
        group_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Schedule>, AppError> {
        let (schedules, total) = ScheduleRepository::new(self.db)
            .find_by_group_paginated(group_id, page, per_page)
            .await?;

        Ok(Paginated::new(schedules, total, page, per_page))
    }

    pub async fn get_group_info(&self, group_id: i32) -> Result<Vec<ScheduleInfo>, AppError> {
        let repo = ScheduleRepository::new(self.db);
        let schedules = repo.find_by_group(group_id).await?;

        Ok(repo.with_names(schedules).await?)
    }

    pub async fn get_by_teacher(&self, teacher_id: i32) -> Result<Vec<Schedule>, AppError> {
        Ok(ScheduleRepository::new(self.db)
            .find_by_teacher(teacher_id)
            .await?)
    }

    pub async fn get_by_teacher_paginated(
        &self,
        teacher_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Schedule>, AppError> {
        let (schedules, total) = ScheduleRepository::new(self.db)
            .find_by_teacher_paginated(teacher_id, page, per_page)
            .await?;

        Ok(Paginated::new(schedules, total, page, per_page))
    }

    pub async fn get_teacher_info(&self, teacher_id: i32) -> Result<Vec<ScheduleInfo>, AppError> {
        let repo = ScheduleRepository::new(self.db);
        let schedules = repo.find_by_teacher(teacher_id).await?;

        Ok(repo.with_names(schedules).await?)
    }

    pub async fn get_by_date(&self, date: NaiveDate) -> Result<Vec<Schedule>, AppError> {
        Ok(ScheduleRepository::new(self.db).find_by_date(date).await?)
    }

    /// Formatted timetable of a group looked up by name.
    ///
    /// # Returns
    /// - `Ok(Vec<ScheduleInfo>)` - Entries in chronological order, never empty
    /// - `Err(AppError::NotFound(_))` - No such group, or it has no entries
    pub async fn get_info_by_group_name(&self, name: &str) -> Result<Vec<ScheduleInfo>, AppError> {
        let group = GroupRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group '{}' not found", name)))?;

        let info = self.get_group_info(group.id).await?;
        if info.is_empty() {
            return Err(AppError::NotFound(format!(
                "No schedule found for group '{}'",
                name
            )));
        }

        Ok(info)
    }

    /// Formatted timetable of a teacher looked up by email.
    ///
    /// # Returns
    /// - `Ok(Vec<ScheduleInfo>)` - Entries in chronological order, never empty
    /// - `Err(AppError::NotFound(_))` - No such teacher, or they have no entries
    pub async fn get_info_by_teacher_email(
        &self,
        email: &str,
    ) -> Result<Vec<ScheduleInfo>, AppError> {
        let teacher = TeacherRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Teacher '{}' not found", email)))?;

        let info = self.get_teacher_info(teacher.id).await?;
        if info.is_empty() {
            return Err(AppError::NotFound(format!(
                "No schedule found for teacher '{}'",
                email
            )));
        }

        Ok(info)
    }
}

/// Checks every referenced row exists, in the order group, course, teacher,
/// class type. The first missing one is reported.
async fn resolve_references<C: ConnectionTrait>(
    db: &C,
    params: &ScheduleParams,
) -> Result<(), AppError> {
    if GroupRepository::new(db)
        .find_by_id(params.group_id)
        .await?
        .is_none()
    {
        return Err(DomainError::not_found("Group", params.group_id).into());
    }
    if CourseRepository::new(db)
        .find_by_id(params.course_id)
        .await?
        .is_none()
    {
        return Err(DomainError::not_found("Course", params.course_id).into());
    }
    if TeacherRepository::new(db)
        .find_by_id(params.teacher_id)
        .await?
        .is_none()
    {
        return Err(DomainError::not_found("Teacher", params.teacher_id).into());
    }
    if ClassTypeRepository::new(db)
        .find_by_id(params.class_type_id)
        .await?
        .is_none()
    {
        return Err(DomainError::not_found("Class type", params.class_type_id).into());
    }

    Ok(())
}
