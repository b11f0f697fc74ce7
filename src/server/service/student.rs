use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::student::StudentRepository,
    error::{domain::DomainError, AppError},
    model::{
        page::Paginated,
        student::{Student, StudentParams},
    },
    service::group::capacity::CapacityLedger,
};

/// Student lifecycle. Every write keeps the group seat counters in step with the
/// student rows in a single transaction.
pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a student and takes a seat in their group.
    ///
    /// # Returns
    /// - `Ok(Student)` - Created student
    /// - `Err(DomainError::ReferenceNotFound)` - Group does not exist
    /// - `Err(DomainError::GroupAtCapacity)` - Group is full, nothing written
    pub async fn create(&self, params: StudentParams) -> Result<Student, AppError> {
        let txn = self.db.begin().await?;

        CapacityLedger::new(&txn).enroll(params.group_id).await?;
        let student = StudentRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!(
            "Enrolled student {} in group {}",
            student.id,
            student.group_id
        );

        Ok(student)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        Ok(StudentRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Student>, AppError> {
        let (students, total) = StudentRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(students, total, page, per_page))
    }

    /// Replaces a student's fields, moving their seat if the group changes.
    ///
    /// # Returns
    /// - `Ok(Student)` - Updated student
    /// - `Err(DomainError::ReferenceNotFound)` - Student or new group does not exist
    /// - `Err(DomainError::GroupAtCapacity)` - New group is full, nothing written
    pub async fn update(&self, id: i32, params: StudentParams) -> Result<Student, AppError> {
        let txn = self.db.begin().await?;
        let repo = StudentRepository::new(&txn);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Student", id))?;

        CapacityLedger::new(&txn)
            .transfer(existing.group_id, params.group_id)
            .await?;
        let student = repo.update(id, params).await?;

        txn.commit().await?;

        if existing.group_id != student.group_id {
            tracing::info!(
                "Moved student {} from group {} to group {}",
                id,
                existing.group_id,
                student.group_id
            );
        }

        Ok(student)
    }

    /// Deletes a student and frees their seat.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = StudentRepository::new(&txn);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Student", id))?;

        repo.delete(id).await?;
        CapacityLedger::new(&txn).release(existing.group_id).await?;

        txn.commit().await?;

        Ok(())
    }
}
