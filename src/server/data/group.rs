//! Study group data repository.
//!
//! Besides plain CRUD this holds the guarded counter updates the capacity ledger
//! relies on. Those are single `UPDATE` statements whose `WHERE` clause re-checks the
//! bound, so a concurrent writer can never push the counter past it.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::group::{Group, GroupParams};

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new, empty group.
    pub async fn create(&self, params: GroupParams) -> Result<Group, DbErr> {
        let entity = entity::student_group::ActiveModel {
            name: ActiveValue::Set(params.name),
            year_created: ActiveValue::Set(params.year_created),
            current_occupancy: ActiveValue::Set(0),
            max_occupancy: ActiveValue::Set(params.max_occupancy),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::StudentGroup::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Group::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::StudentGroup::find()
            .filter(entity::student_group::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Gets groups ordered by name.
    ///
    /// # Returns
    /// - `Ok((groups, total))` - Groups on the requested page and total group count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Group>, u64), DbErr> {
        let paginator = entity::prelude::StudentGroup::find()
            .order_by_asc(entity::student_group::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Group::from_entity).collect(), total))
    }

    /// Updates name, year and maximum. The occupancy counter is left untouched.
    ///
    /// # Returns
    /// - `Ok(Group)` - Updated group
    /// - `Err(DbErr::RecordNotUpdated)` - No group with that id
    pub async fn update(&self, id: i32, params: GroupParams) -> Result<Group, DbErr> {
        let entity = entity::student_group::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(params.name),
            year_created: ActiveValue::Set(params.year_created),
            max_occupancy: ActiveValue::Set(params.max_occupancy),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StudentGroup::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Takes one seat if the group is below its maximum.
    ///
    /// # Returns
    /// - `Ok(true)` - Counter incremented
    /// - `Ok(false)` - Group is full or does not exist; nothing changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn increment_occupancy(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StudentGroup::update_many()
            .col_expr(
                entity::student_group::Column::CurrentOccupancy,
                Expr::col(entity::student_group::Column::CurrentOccupancy).add(1),
            )
            .filter(entity::student_group::Column::Id.eq(id))
            .filter(
                Expr::col(entity::student_group::Column::CurrentOccupancy)
                    .lt(Expr::col(entity::student_group::Column::MaxOccupancy)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Frees one seat if the counter is above zero.
    ///
    /// # Returns
    /// - `Ok(true)` - Counter decremented
    /// - `Ok(false)` - Counter already zero or group does not exist; nothing changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn decrement_occupancy(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StudentGroup::update_many()
            .col_expr(
                entity::student_group::Column::CurrentOccupancy,
                Expr::col(entity::student_group::Column::CurrentOccupancy).sub(1),
            )
            .filter(entity::student_group::Column::Id.eq(id))
            .filter(entity::student_group::Column::CurrentOccupancy.gt(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
