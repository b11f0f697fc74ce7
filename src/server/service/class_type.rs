use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::class_type::ClassTypeRepository,
    error::{domain::DomainError, AppError},
    model::class_type::ClassType,
};

pub struct ClassTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String) -> Result<ClassType, AppError> {
        let name = required_name(name)?;

        let txn = self.db.begin().await?;
        let repo = ClassTypeRepository::new(&txn);

        if repo.find_by_name(&name).await?.is_some() {
            return Err(name_taken(&name));
        }

        let class_type = repo.create(name).await?;
        txn.commit().await?;

        Ok(class_type)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ClassType>, AppError> {
        Ok(ClassTypeRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<ClassType>, AppError> {
        Ok(ClassTypeRepository::new(self.db).get_all().await?)
    }

    pub async fn update(&self, id: i32, name: String) -> Result<ClassType, AppError> {
        let name = required_name(name)?;

        let txn = self.db.begin().await?;
        let repo = ClassTypeRepository::new(&txn);

        if repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Class type", id).into());
        }

        if let Some(other) = repo.find_by_name(&name).await? {
            if other.id != id {
                return Err(name_taken(&name));
            }
        }

        let class_type = repo.update(id, name).await?;
        txn.commit().await?;

        Ok(class_type)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ClassTypeRepository::new(self.db).delete(id).await? {
            return Err(DomainError::not_found("Class type", id).into());
        }

        Ok(())
    }
}

/// Trims the name and rejects it if nothing is left.
pub(super) fn required_name(name: String) -> Result<String, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Name cannot be empty".to_string()));
    }

    Ok(trimmed.to_string())
}

fn name_taken(name: &str) -> AppError {
    AppError::BadRequest(format!("Class type '{}' already exists", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    #[tokio::test]
    async fn trims_and_stores_name() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let class_type = ClassTypeService::new(db).create("  Lecture ".to_string()).await?;

        assert_eq!(class_type.name, "Lecture");

        Ok(())
    }

    #[tokio::test]
    async fn rejects_blank_name() {
        let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = ClassTypeService::new(db).create("   ".to_string()).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn update_missing_class_type_is_not_found() {
        let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = ClassTypeService::new(db).update(7, "Lab".to_string()).await;

        assert!(matches!(
            result,
            Err(AppError::DomainErr(DomainError::ReferenceNotFound { .. }))
        ));
    }
}
