use sea_orm::entity::prelude::*;

/// Study group. `current_occupancy` is a denormalized student count kept in step with
/// the `students` table by the capacity ledger.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub year_created: i32,
    pub current_occupancy: i32,
    pub max_occupancy: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
