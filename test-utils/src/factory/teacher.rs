//! Teacher factory for creating test teacher entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teachers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let teacher = TeacherFactory::new(&db)
///     .email("smith@uni.test")
///     .build()
///     .await?;
/// ```
pub struct TeacherFactory<'a> {
    db: &'a DatabaseConnection,
    last_name: String,
    name: String,
    middle_name: Option<String>,
    email: String,
    phone: Option<String>,
}

impl<'a> TeacherFactory<'a> {
    /// Creates a new TeacherFactory with default values.
    ///
    /// Defaults:
    /// - last_name: `"Teacher{id}"`
    /// - name: `"Ivan"`
    /// - email: `"teacher{id}@uni.test"`
    /// - middle_name, phone: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            last_name: format!("Teacher{}", id),
            name: "Ivan".to_string(),
            middle_name: None,
            email: format!("teacher{}@uni.test", id),
            phone: None,
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

    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Builds and inserts the teacher entity into the database.
    pub async fn build(self) -> Result<entity::teacher::Model, DbErr> {
        entity::teacher::ActiveModel {
            last_name: ActiveValue::Set(self.last_name),
            name: ActiveValue::Set(self.name),
            middle_name: ActiveValue::Set(self.middle_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a teacher with default values.
pub async fn create_teacher(db: &DatabaseConnection) -> Result<entity::teacher::Model, DbErr> {
    TeacherFactory::new(db).build().await
}
