//! Attendance status factory.
//!
//! Test schemas are built from entities, so the statuses seeded by the migration
//! are absent until created here.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a status with the given name.
pub async fn create_status(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::attendance_status::Model, DbErr> {
    entity::attendance_status::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates `Present`, `Absent`, `Late` and `Excused` in that order.
///
/// # Returns
/// - `Ok(Vec<Model>)` - Created statuses in insertion order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_default_statuses(
    db: &DatabaseConnection,
) -> Result<Vec<entity::attendance_status::Model>, DbErr> {
    let mut statuses = Vec::new();
    for name in ["Present", "Absent", "Late", "Excused"] {
        statuses.push(create_status(db, name).await?);
    }
    Ok(statuses)
}
