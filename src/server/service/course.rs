use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::course::CourseRepository,
    error::{domain::DomainError, AppError},
    model::{
        course::{Course, CourseParams},
        page::Paginated,
    },
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a course with a unique name and non-negative class counts.
    pub async fn create(&self, params: CourseParams) -> Result<Course, AppError> {
        validate_counts(&params)?;

        let txn = self.db.begin().await?;
        let repo = CourseRepository::new(&txn);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(name_taken(&params.name));
        }

        let course = repo.create(params).await?;
        txn.commit().await?;

        Ok(course)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Course>, AppError> {
        Ok(CourseRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Course>, AppError> {
        Ok(CourseRepository::new(self.db).find_by_name(name).await?)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Course>, AppError> {
        let (courses, total) = CourseRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(courses, total, page, per_page))
    }

    pub async fn update(&self, id: i32, params: CourseParams) -> Result<Course, AppError> {
        validate_counts(&params)?;

        let txn = self.db.begin().await?;
        let repo = CourseRepository::new(&txn);

        if repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Course", id).into());
        }

        if let Some(other) = repo.find_by_name(&params.name).await? {
            if other.id != id {
                return Err(name_taken(&params.name));
            }
        }

        let course = repo.update(id, params).await?;
        txn.commit().await?;

        Ok(course)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CourseRepository::new(self.db).delete(id).await? {
            return Err(DomainError::not_found("Course", id).into());
        }

        Ok(())
    }
}

fn validate_counts(params: &CourseParams) -> Result<(), AppError> {
    if params.lecture_count < 0 || params.seminar_count < 0 || params.lab_count < 0 {
        return Err(AppError::BadRequest(
            "Class counts cannot be negative".to_string(),
        ));
    }

    Ok(())
}

fn name_taken(name: &str) -> AppError {
    AppError::BadRequest(format!("Course '{}' already exists", name))
}
