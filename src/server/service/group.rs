pub mod capacity;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{group::GroupRepository, student::StudentRepository},
    error::{domain::DomainError, AppError},
    model::{
        group::{Group, GroupParams},
        page::Paginated,
        student::Student,
    },
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an empty group.
    ///
    /// # Returns
    /// - `Ok(Group)` - Created group with `current_occupancy` 0
    /// - `Err(AppError::BadRequest(_))` - Maximum not positive or name already taken
    pub async fn create(&self, params: GroupParams) -> Result<Group, AppError> {
        validate_maximum(params.max_occupancy)?;

        let txn = self.db.begin().await?;
        let repo = GroupRepository::new(&txn);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(name_taken(&params.name));
        }

        let group = repo.create(params).await?;
        txn.commit().await?;

        tracing::info!(
            "Created group {} '{}' with {} seats",
            group.id,
            group.name,
            group.max_occupancy
        );

        Ok(group)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Group>, AppError> {
        Ok(GroupRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Group>, AppError> {
        Ok(GroupRepository::new(self.db).find_by_name(name).await?)
    }

    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Paginated<Group>, AppError> {
        let (groups, total) = GroupRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(groups, total, page, per_page))
    }

    /// Gets the students enrolled in a group.
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - Students ordered by last name, possibly empty
    /// - `Err(DomainError::ReferenceNotFound)` - Group does not exist
    pub async fn get_students(&self, id: i32) -> Result<Vec<Student>, AppError> {
        if GroupRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Group", id).into());
        }

        Ok(StudentRepository::new(self.db).find_by_group(id).await?)
    }

    /// Replaces name, year and maximum. The seat counter is never written here.
    ///
    /// # Returns
    /// - `Ok(Group)` - Updated group
    /// - `Err(DomainError::ReferenceNotFound)` - Group does not exist
    /// - `Err(AppError::BadRequest(_))` - Maximum below current occupancy, not positive,
    ///   or name taken by another group
    pub async fn update(&self, id: i32, params: GroupParams) -> Result<Group, AppError> {
        validate_maximum(params.max_occupancy)?;

        let txn = self.db.begin().await?;
        let repo = GroupRepository::new(&txn);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Group", id))?;

        if params.max_occupancy < existing.current_occupancy {
            return Err(AppError::BadRequest(format!(
                "Maximum occupancy cannot be lower than the {} students already enrolled",
                existing.current_occupancy
            )));
        }

        if let Some(other) = repo.find_by_name(&params.name).await? {
            if other.id != id {
                return Err(name_taken(&params.name));
            }
        }

        let group = repo.update(id, params).await?;
        txn.commit().await?;

        Ok(group)
    }

    /// Deletes an empty group. Its schedule entries go with it.
    ///
    /// # Returns
    /// - `Ok(())` - Group deleted
    /// - `Err(DomainError::ReferenceNotFound)` - Group does not exist
    /// - `Err(AppError::BadRequest(_))` - Students are still enrolled
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if GroupRepository::new(&txn).find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Group", id).into());
        }

        let enrolled = StudentRepository::new(&txn).count_by_group(id).await?;
        if enrolled > 0 {
            return Err(AppError::BadRequest(format!(
                "Cannot delete group with {} enrolled students",
                enrolled
            )));
        }

        GroupRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        tracing::info!("Deleted group {}", id);

        Ok(())
    }
}

fn validate_maximum(max_occupancy: i32) -> Result<(), AppError> {
    if max_occupancy <= 0 {
        return Err(AppError::BadRequest(
            "Maximum occupancy must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

fn name_taken(name: &str) -> AppError {
    AppError::BadRequest(format!("Group '{}' already exists", name))
}
