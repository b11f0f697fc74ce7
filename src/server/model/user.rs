//! User account domain model and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, Role, UpdateUserDto, UserDto},
    server::{error::AppError, util::parse::parse_role},
};

/// Login account with its role and the student or teacher it acts as.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub role: Role,
    /// Set for `STUDENT` accounts.
    pub student_id: Option<i32>,
    /// Set for `TEACHER` accounts.
    pub teacher_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - Converted user
    /// - `Err(AppError::InternalErr(ParseRole))` - Stored role string is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = parse_role(&entity.role)?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            role,
            student_id: entity.student_id,
            teacher_id: entity.teacher_id,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            role: self.role,
            student_id: self.student_id,
            teacher_id: self.teacher_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    pub password: String,
    pub role: Role,
    /// Student id for `STUDENT`, teacher id for `TEACHER`, ignored for `ADMIN`.
    pub related_id: Option<i32>,
}

impl RegisterUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
            role: dto.role,
            related_id: dto.related_id,
        }
    }
}

/// Partial account update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub related_id: Option<i32>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
            role: dto.role,
            related_id: dto.related_id,
        }
    }
}

/// Role of an account together with the row it is linked to.
///
/// Built by the user service after the linked student or teacher has been verified,
/// so `student_id` is only set for students and `teacher_id` only for teachers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountLink {
    pub role: Role,
    pub student_id: Option<i32>,
    pub teacher_id: Option<i32>,
}

impl AccountLink {
    pub fn admin() -> Self {
        Self {
            role: Role::Admin,
            student_id: None,
            teacher_id: None,
        }
    }

    pub fn student(student_id: i32) -> Self {
        Self {
            role: Role::Student,
            student_id: Some(student_id),
            teacher_id: None,
        }
    }

    pub fn teacher(teacher_id: i32) -> Self {
        Self {
            role: Role::Teacher,
            student_id: None,
            teacher_id: Some(teacher_id),
        }
    }
}

/// Column changes applied by `UserRepository::update`. `None` leaves a column as is.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub link: Option<AccountLink>,
}
