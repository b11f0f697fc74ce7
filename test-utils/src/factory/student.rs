//! Student factory for creating test student entities.
//!
//! Inserts the row directly; the owning group's occupancy counter is left untouched.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    last_name: String,
    name: String,
    middle_name: Option<String>,
    email: String,
    phone: Option<String>,
    group_id: i32,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory enrolled in `group_id`.
    ///
    /// Defaults:
    /// - last_name: `"Student{id}"`
    /// - name: `"Anna"`
    /// - email: `"student{id}@uni.test"`
    pub fn new(db: &'a DatabaseConnection, group_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            last_name: format!("Student{}", id),
            name: "Anna".to_string(),
            middle_name: None,
            email: format!("student{}@uni.test", id),
            phone: None,
            group_id,
        }
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            last_name: ActiveValue::Set(self.last_name),
            name: ActiveValue::Set(self.name),
            middle_name: ActiveValue::Set(self.middle_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            group_id: ActiveValue::Set(self.group_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values in the given group.
pub async fn create_student(
    db: &DatabaseConnection,
    group_id: i32,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, group_id).build().await
}
