//! Class type factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a class type with a unique `"Class Type {id}"` name.
pub async fn create_class_type(
    db: &DatabaseConnection,
) -> Result<entity::class_type::Model, DbErr> {
    create_class_type_named(db, format!("Class Type {}", next_id())).await
}

/// Creates a class type with the given name.
pub async fn create_class_type_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::class_type::Model, DbErr> {
    entity::class_type::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
