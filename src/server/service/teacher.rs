use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::teacher::TeacherRepository,
    error::{domain::DomainError, AppError},
    model::{
        page::Paginated,
        teacher::{Teacher, TeacherParams},
    },
};

pub struct TeacherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a teacher. Email addresses are unique across teachers.
    ///
    /// # Returns
    /// - `Ok(Teacher)` - Created teacher
    /// - `Err(AppError::BadRequest(_))` - Email already used by another teacher
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn create(&self, params: TeacherParams) -> Result<Teacher, AppError> {
        let txn = self.db.begin().await?;
        let repo = TeacherRepository::new(&txn);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(email_taken(&params.email));
        }

        let teacher = repo.create(params).await?;
        txn.commit().await?;

        tracing::info!("Created teacher {} ({})", teacher.id, teacher.email);

        Ok(teacher)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Teacher>, AppError> {
        Ok(TeacherRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<Teacher>, AppError> {
        Ok(TeacherRepository::new(self.db).find_by_email(email).await?)
    }

    /// Gets paginated teachers ordered by last name.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Teacher>, AppError> {
        let (teachers, total) = TeacherRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(teachers, total, page, per_page))
    }

    /// Replaces a teacher's fields.
    ///
    /// # Returns
    /// - `Ok(Teacher)` - Updated teacher
    /// - `Err(DomainError::ReferenceNotFound)` - No teacher with that id
    /// - `Err(AppError::BadRequest(_))` - New email belongs to another teacher
    pub async fn update(&self, id: i32, params: TeacherParams) -> Result<Teacher, AppError> {
        let txn = self.db.begin().await?;
        let repo = TeacherRepository::new(&txn);

        if repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Teacher", id).into());
        }

        if let Some(other) = repo.find_by_email(&params.email).await? {
            if other.id != id {
                return Err(email_taken(&params.email));
            }
        }

        let teacher = repo.update(id, params).await?;
        txn.commit().await?;

        Ok(teacher)
    }

    /// Deletes a teacher. Their schedule entries, and the attendance marked for
    /// those entries, are removed by the foreign key cascade.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TeacherRepository::new(self.db).delete(id).await? {
            return Err(DomainError::not_found("Teacher", id).into());
        }

        tracing::info!("Deleted teacher {}", id);

        Ok(())
    }
}

fn email_taken(email: &str) -> AppError {
    AppError::BadRequest(format!("Teacher with email '{}' already exists", email))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn params(email: &str) -> TeacherParams {
        TeacherParams {
            last_name: "Ivanov".to_string(),
            name: "Ivan".to_string(),
            middle_name: None,
            email: email.to_string(),
            phone: None,
        }
    }

    #[tokio::test]
    async fn rejects_duplicate_email_on_create() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = TeacherService::new(db);

        service.create(params("ivanov@uni.edu")).await?;
        let result = service.create(params("ivanov@uni.edu")).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn update_keeps_own_email() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let teacher = factory::create_teacher(db).await?;

        let mut changed = params(&teacher.email);
        changed.last_name = "Petrov".to_string();
        let updated = TeacherService::new(db).update(teacher.id, changed).await?;

        assert_eq!(updated.last_name, "Petrov");
        assert_eq!(updated.email, teacher.email);

        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_email_of_another_teacher() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let first = factory::create_teacher(db).await?;
        let second = factory::create_teacher(db).await?;

        let result = TeacherService::new(db)
            .update(second.id, params(&first.email))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_teacher_is_not_found() {
        let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = TeacherService::new(db).delete(42).await;

        assert!(matches!(
            result,
            Err(AppError::DomainErr(DomainError::ReferenceNotFound { .. }))
        ));
    }
}
