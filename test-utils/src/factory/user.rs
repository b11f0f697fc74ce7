//! User factory for creating test accounts.
//!
//! Passwords are hashed with the minimum bcrypt cost to keep tests fast.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password given to every factory-created user unless overridden.
pub const DEFAULT_PASSWORD: &str = "password";

const TEST_BCRYPT_COST: u32 = 4;

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .username("jdoe")
///     .role("TEACHER")
///     .teacher_id(Some(teacher.id))
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password: String,
    role: String,
    student_id: Option<i32>,
    teacher_id: Option<i32>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"`
    /// - password: [`DEFAULT_PASSWORD`]
    /// - role: `"ADMIN"`
    /// - student_id, teacher_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            password: DEFAULT_PASSWORD.to_string(),
            role: "ADMIN".to_string(),
            student_id: None,
            teacher_id: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the stored role string (`ADMIN`, `TEACHER` or `STUDENT`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn student_id(mut self, student_id: Option<i32>) -> Self {
        self.student_id = student_id;
        self
    }

    pub fn teacher_id(mut self, teacher_id: Option<i32>) -> Self {
        self.teacher_id = teacher_id;
        self
    }

    /// Hashes the password and inserts the user.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Hashing failed or database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let password_hash = bcrypt::hash(&self.password, TEST_BCRYPT_COST)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(self.role),
            student_id: ActiveValue::Set(self.student_id),
            teacher_id: ActiveValue::Set(self.teacher_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Alias of [`create_user`] for tests that want to spell out the role.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    create_user(db).await
}

/// Creates a `TEACHER` account linked to `teacher_id`.
pub async fn create_teacher_user(
    db: &DatabaseConnection,
    teacher_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .role("TEACHER")
        .teacher_id(Some(teacher_id))
        .build()
        .await
}

/// Creates a `STUDENT` account linked to `student_id`.
pub async fn create_student_user(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .role("STUDENT")
        .student_id(Some(student_id))
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_admin_with_hashed_password() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_university_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert_eq!(user.role, "ADMIN");
        assert_ne!(user.password_hash, DEFAULT_PASSWORD);
        assert!(bcrypt::verify(DEFAULT_PASSWORD, &user.password_hash).unwrap());

        Ok(())
    }

    #[tokio::test]
    async fn creates_teacher_user_linked_to_teacher() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_university_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let teacher = crate::factory::create_teacher(db).await?;
        let user = create_teacher_user(db, teacher.id).await?;

        assert_eq!(user.role, "TEACHER");
        assert_eq!(user.teacher_id, Some(teacher.id));
        assert_eq!(user.student_id, None);

        Ok(())
    }
}
