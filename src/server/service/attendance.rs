use std::collections::HashSet;

use chrono::{Local, NaiveTime};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        attendance::AttendanceRepository, attendance_status::AttendanceStatusRepository,
        schedule::ScheduleRepository, student::StudentRepository,
    },
    error::{domain::DomainError, AppError},
    model::{
        attendance::{Attendance, AttendanceFilter, AttendanceInfo, AttendanceParams},
        page::Paginated,
    },
};

/// Attendance marking. At most one record exists per (schedule entry, student).
pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an attendance record. A missing `marked_time` defaults to now.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - Created record
    /// - `Err(DomainError::ReferenceNotFound)` - Schedule entry, student or status missing
    /// - `Err(DomainError::DuplicateAttendance)` - Student already marked for this entry
    pub async fn create(&self, params: AttendanceParams) -> Result<Attendance, AppError> {
        let txn = self.db.begin().await?;

        resolve_schedule_and_status(&txn, params.schedule_id, params.status_id).await?;
        resolve_student(&txn, params.student_id).await?;
        ensure_not_marked(&txn, params.schedule_id, params.student_id, None).await?;

        let marked_time = params.marked_time.unwrap_or_else(now);
        let attendance = AttendanceRepository::new(&txn)
            .create(
                params.schedule_id,
                params.student_id,
                params.status_id,
                marked_time,
            )
            .await?;

        txn.commit().await?;

        Ok(attendance)
    }

    /// Marks one student for a class at the current time.
    pub async fn mark(
        &self,
        schedule_id: i32,
        student_id: i32,
        status_id: i32,
    ) -> Result<Attendance, AppError> {
        self.create(AttendanceParams {
            schedule_id,
            student_id,
            status_id,
            marked_time: None,
        })
        .await
    }

    /// Marks several students with the same status for one class.
    ///
    /// All-or-nothing: if any student is missing, already marked or listed twice,
    /// no record is written.
    ///
    /// # Returns
    /// - `Ok(Vec<Attendance>)` - Created records in the order of `student_ids`
    /// - `Err(DomainError::ReferenceNotFound)` - Schedule entry, status or a student missing
    /// - `Err(DomainError::DuplicateAttendance)` - A student is already marked
    pub async fn mark_group(
        &self,
        schedule_id: i32,
        student_ids: Vec<i32>,
        status_id: i32,
    ) -> Result<Vec<Attendance>, AppError> {
        let txn = self.db.begin().await?;

        resolve_schedule_and_status(&txn, schedule_id, status_id).await?;

        let marked_time = now();
        let repo = AttendanceRepository::new(&txn);
        let mut seen = HashSet::new();
        let mut created = Vec::with_capacity(student_ids.len());

        for student_id in student_ids {
            resolve_student(&txn, student_id).await?;

            if !seen.insert(student_id) {
                return Err(DomainError::DuplicateAttendance {
                    schedule_id,
                    student_id,
                }
                .into());
            }
            ensure_not_marked(&txn, schedule_id, student_id, None).await?;

            created.push(
                repo.create(schedule_id, student_id, status_id, marked_time)
                    .await?,
            );
        }

        txn.commit().await?;

        tracing::info!(
            "Marked {} students for schedule entry {}",
            created.len(),
            schedule_id
        );

        Ok(created)
    }

    /// Replaces an attendance record. A missing `marked_time` keeps the stored one.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - Updated record
    /// - `Err(DomainError::ReferenceNotFound)` - Record or one of its references missing
    /// - `Err(DomainError::DuplicateAttendance)` - Another record already covers the new pair
    pub async fn update(&self, id: i32, params: AttendanceParams) -> Result<Attendance, AppError> {
        let txn = self.db.begin().await?;
        let repo = AttendanceRepository::new(&txn);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Attendance", id))?;

        resolve_schedule_and_status(&txn, params.schedule_id, params.status_id).await?;
        resolve_student(&txn, params.student_id).await?;
        ensure_not_marked(&txn, params.schedule_id, params.student_id, Some(id)).await?;

        let attendance = repo
            .update(
                id,
                params.schedule_id,
                params.student_id,
                params.status_id,
                params.marked_time.unwrap_or(existing.marked_time),
            )
            .await?;

        txn.commit().await?;

        Ok(attendance)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AttendanceRepository::new(self.db).delete(id).await? {
            return Err(DomainError::not_found("Attendance", id).into());
        }

        Ok(())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Attendance>, AppError> {
        Ok(AttendanceRepository::new(self.db).find_by_id(id).await?)
    }

    /// Gets every record matching the filter.
    pub async fn get_filtered(&self, filter: AttendanceFilter) -> Result<Vec<Attendance>, AppError> {
        Ok(AttendanceRepository::new(self.db).find_all(filter).await?)
    }

    pub async fn get_filtered_paginated(
        &self,
        filter: AttendanceFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Attendance>, AppError> {
        let (records, total) = AttendanceRepository::new(self.db)
            .find_paginated(filter, page, per_page)
            .await?;

        Ok(Paginated::new(records, total, page, per_page))
    }

    /// Gets records matching the filter with display names resolved.
    pub async fn get_filtered_info(
        &self,
        filter: AttendanceFilter,
    ) -> Result<Vec<AttendanceInfo>, AppError> {
        let repo = AttendanceRepository::new(self.db);
        let records = repo.find_all(filter).await?;

        Ok(repo.with_names(records).await?)
    }
}

fn now() -> NaiveTime {
    Local::now().time()
}

async fn resolve_schedule_and_status<C: ConnectionTrait>(
    db: &C,
    schedule_id: i32,
    status_id: i32,
) -> Result<(), AppError> {
    if ScheduleRepository::new(db)
        .find_by_id(schedule_id)
        .await?
        .is_none()
    {
        return Err(DomainError::not_found("Schedule", schedule_id).into());
    }
    if AttendanceStatusRepository::new(db)
        .find_by_id(status_id)
        .await?
        .is_none()
    {
        return Err(DomainError::not_found("Attendance status", status_id).into());
    }

    Ok(())
}

async fn resolve_student<C: ConnectionTrait>(db: &C, student_id: i32) -> Result<(), AppError> {
    if StudentRepository::new(db)
        .find_by_id(student_id)
        .await?
        .is_none()
    {
        return Err(DomainError::not_found("Student", student_id).into());
    }

    Ok(())
}

/// Rejects the pair if a record other than `exclude_id` already holds it.
async fn ensure_not_marked<C: ConnectionTrait>(
    db: &C,
    schedule_id: i32,
    student_id: i32,
    exclude_id: Option<i32>,
) -> Result<(), AppError> {
    let existing = AttendanceRepository::new(db)
        .find_by_schedule_and_student(schedule_id, student_id)
        .await?;

    match existing {
        Some(record) if Some(record.id) != exclude_id => Err(DomainError::DuplicateAttendance {
            schedule_id,
            student_id,
        }
        .into()),
        _ => Ok(()),
    }
}
