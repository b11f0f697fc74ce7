//! Group factory for creating test study groups.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let group = GroupFactory::new(&db)
///     .max_occupancy(1)
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    year_created: i32,
    current_occupancy: i32,
    max_occupancy: i32,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Group {id}"`
    /// - year_created: `2024`
    /// - current_occupancy: `0`
    /// - max_occupancy: `30`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Group {}", id),
            year_created: 2024,
            current_occupancy: 0,
            max_occupancy: 30,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn year_created(mut self, year_created: i32) -> Self {
        self.year_created = year_created;
        self
    }

    /// Sets the stored counter directly. No student rows are created.
    pub fn current_occupancy(mut self, current_occupancy: i32) -> Self {
        self.current_occupancy = current_occupancy;
        self
    }

    pub fn max_occupancy(mut self, max_occupancy: i32) -> Self {
        self.max_occupancy = max_occupancy;
        self
    }

    /// Builds and inserts the group entity into the database.
    pub async fn build(self) -> Result<entity::student_group::Model, DbErr> {
        entity::student_group::ActiveModel {
            name: ActiveValue::Set(self.name),
            year_created: ActiveValue::Set(self.year_created),
            current_occupancy: ActiveValue::Set(self.current_occupancy),
            max_occupancy: ActiveValue::Set(self.max_occupancy),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty group with default values.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::student_group::Model, DbErr> {
    GroupFactory::new(db).build().await
}
