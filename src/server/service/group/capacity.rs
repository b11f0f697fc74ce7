//! Seat accounting for study groups.
//!
//! A group's `current_occupancy` must always equal the number of students enrolled
//! in it and stay within `0..=max_occupancy`. Every change to the counter goes
//! through [`CapacityLedger`], whose writes are single guarded UPDATE statements
//! so two concurrent enrollments can never both take the last seat.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::group::GroupRepository,
    error::{domain::DomainError, AppError},
    model::group::Group,
};

/// Moves seats in and out of groups.
///
/// Run it on the transaction that also inserts, moves or deletes the student, so a
/// failure after the seat change rolls the counter back with the rest.
pub struct CapacityLedger<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CapacityLedger<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Takes a seat in the group.
    ///
    /// # Returns
    /// - `Ok(Group)` - Group state before the seat was taken
    /// - `Err(DomainError::ReferenceNotFound)` - Group does not exist
    /// - `Err(DomainError::GroupAtCapacity)` - No free seat, counter unchanged
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn enroll(&self, group_id: i32) -> Result<Group, AppError> {
        let repo = GroupRepository::new(self.db);

        let group = repo
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::not_found("Group", group_id))?;

        // The guarded UPDATE is the authoritative check, the read only gives a
        // precise error without touching the row.
        if !group.has_free_seat() || !repo.increment_occupancy(group_id).await? {
            return Err(DomainError::GroupAtCapacity {
                group_id,
                name: group.name,
            }
            .into());
        }

        Ok(group)
    }

    /// Moves one seat from `from_group_id` to `to_group_id`.
    ///
    /// Same-group transfers are a no-op. Otherwise the destination seat is taken
    /// first, so a full destination leaves both counters unchanged.
    pub async fn transfer(&self, from_group_id: i32, to_group_id: i32) -> Result<(), AppError> {
        if from_group_id == to_group_id {
            return Ok(());
        }

        self.enroll(to_group_id).await?;
        self.release(from_group_id).await?;

        Ok(())
    }

    /// Frees a seat in the group.
    ///
    /// The counter never goes below zero. Releasing from an empty or missing group
    /// changes nothing and is logged, since it means the counter had drifted.
    pub async fn release(&self, group_id: i32) -> Result<(), AppError> {
        if !GroupRepository::new(self.db)
            .decrement_occupancy(group_id)
            .await?
        {
            tracing::warn!(
                "Seat release for group {} found no occupied seat; counter left at zero",
                group_id
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory, factory::student_group::GroupFactory};

    async fn occupancy(db: &sea_orm::DatabaseConnection, group_id: i32) -> i32 {
        GroupRepository::new(db)
            .find_by_id(group_id)
            .await
            .unwrap()
            .unwrap()
            .current_occupancy
    }

    #[tokio::test]
    async fn enroll_takes_a_seat() -> Result<(), AppError> {
        let test = TestBuilder::new().with_group_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let group = factory::create_group(db).await?;

        CapacityLedger::new(db).enroll(group.id).await?;

        assert_eq!(occupancy(db, group.id).await, 1);

        Ok(())
    }

    #[tokio::test]
    async fn enroll_rejects_full_group() -> Result<(), AppError> {
        let test = TestBuilder::new().with_group_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let group = GroupFactory::new(db)
            .current_occupancy(2)
            .max_occupancy(2)
            .build()
            .await?;

        let result = CapacityLedger::new(db).enroll(group.id).await;

        assert!(matches!(
            result,
            Err(AppError::DomainErr(DomainError::GroupAtCapacity { group_id, .. })) if group_id == group.id
        ));
        assert_eq!(occupancy(db, group.id).await, 2);

        Ok(())
    }

    #[tokio::test]
    async fn enroll_into_missing_group_is_not_found() {
        let test = TestBuilder::new().with_group_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = CapacityLedger::new(db).enroll(404).await;

        assert!(matches!(
            result,
            Err(AppError::DomainErr(DomainError::ReferenceNotFound { entity: "Group", id: 404 }))
        ));
    }

    #[tokio::test]
    async fn transfer_moves_one_seat() -> Result<(), AppError> {
        let test = TestBuilder::new().with_group_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let from = GroupFactory::new(db).current_occupancy(3).build().await?;
        let to = GroupFactory::new(db).current_occupancy(1).build().await?;

        CapacityLedger::new(db).transfer(from.id, to.id).await?;

        assert_eq!(occupancy(db, from.id).await, 2);
        assert_eq!(occupancy(db, to.id).await, 2);

        Ok(())
    }

    #[tokio::test]
    async fn transfer_to_same_full_group_is_noop() -> Result<(), AppError> {
        let test = TestBuilder::new().with_group_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let group = GroupFactory::new(db)
            .current_occupancy(5)
            .max_occupancy(5)
            .build()
            .await?;

        CapacityLedger::new(db).transfer(group.id, group.id).await?;

        assert_eq!(occupancy(db, group.id).await, 5);

        Ok(())
    }

    #[tokio::test]
    async fn transfer_to_full_group_changes_nothing() -> Result<(), AppError> {
        let test = TestBuilder::new().with_group_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let from = GroupFactory::new(db).current_occupancy(1).build().await?;
        let to = GroupFactory::new(db)
            .current_occupancy(1)
            .max_occupancy(1)
            .build()
            .await?;

        let result = CapacityLedger::new(db).transfer(from.id, to.id).await;

        assert!(matches!(
            result,
            Err(AppError::DomainErr(DomainError::GroupAtCapacity { .. }))
        ));
        assert_eq!(occupancy(db, from.id).await, 1);
        assert_eq!(occupancy(db, to.id).await, 1);

        Ok(())
    }

    #[tokio::test]
    async fn release_clamps_at_zero() -> Result<(), AppError> {
        let test = TestBuilder::new().with_group_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let group = factory::create_group(db).await?;

        CapacityLedger::new(db).release(group.id).await?;

        assert_eq!(occupancy(db, group.id).await, 0);

        Ok(())
    }
}
