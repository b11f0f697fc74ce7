use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::user::Role,
    server::{
        data::{student::StudentRepository, teacher::TeacherRepository, user::UserRepository},
        error::{domain::DomainError, AppError},
        model::{
            page::Paginated,
            user::{AccountLink, RegisterUserParams, UpdateUserParams, User, UserChanges},
        },
        service::{auth::hash_password, group::capacity::CapacityLedger},
        util::parse::parse_role,
    },
};

/// Account administration.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an account linked to an existing student or teacher.
    ///
    /// # Arguments
    /// - `params` - Username, plain password, role and `related_id`. `related_id` is the
    ///   student id for `STUDENT`, the teacher id for `TEACHER` and ignored for `ADMIN`.
    ///
    /// # Returns
    /// - `Ok(User)` - Created account
    /// - `Err(AppError::BadRequest(_))` - Empty credentials, taken username or missing `related_id`
    /// - `Err(DomainError::ReferenceNotFound)` - Linked student or teacher does not exist
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let username = params.username.trim().to_string();
        if username.is_empty() || params.password.is_empty() {
            return Err(AppError::BadRequest(
                "Username and password are required".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        if repo.find_by_username(&username).await?.is_some() {
            return Err(username_taken(&username));
        }

        let link = resolve_link(&txn, params.role, params.related_id).await?;
        let password_hash = hash_password(&params.password)?;
        let user = repo.create(username, password_hash, link).await?;

        txn.commit().await?;

        tracing::info!(
            "Registered {} account '{}' (id {})",
            link.role.as_str(),
            user.username,
            user.id
        );

        User::from_entity(user)
    }

    /// Creates the first admin account if none exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Admin created
    /// - `Ok(false)` - An admin already existed, nothing written
    pub async fn bootstrap_admin(&self, username: &str, password: &str) -> Result<bool, AppError> {
        if UserRepository::new(self.db).admin_exists().await? {
            return Ok(false);
        }

        self.register(RegisterUserParams {
            username: username.to_string(),
            password: password.to_string(),
            role: Role::Admin,
            related_id: None,
        })
        .await?;

        Ok(true)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Paginated<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        let users = users
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Paginated::new(users, total, page, per_page))
    }

    /// Applies a partial update. Fields left `None` are kept.
    ///
    /// Changing only `related_id` relinks the account within its current role.
    /// Changing the role requires a `related_id` unless the new role is `ADMIN`.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated account, or the stored one when nothing was changed
    /// - `Err(DomainError::ReferenceNotFound)` - Account or new linked row missing
    /// - `Err(AppError::BadRequest(_))` - Username taken or empty password
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("User", id))?;

        let mut changes = UserChanges::default();

        if let Some(username) = params.username {
            let username = username.trim().to_string();
            if username.is_empty() {
                return Err(AppError::BadRequest("Username cannot be empty".to_string()));
            }
            if username != existing.username {
                if repo.find_by_username(&username).await?.is_some() {
                    return Err(username_taken(&username));
                }
                changes.username = Some(username);
            }
        }

        if let Some(password) = params.password {
            if password.is_empty() {
                return Err(AppError::BadRequest("Password cannot be empty".to_string()));
            }
            changes.password_hash = Some(hash_password(&password)?);
        }

        if params.role.is_some() || params.related_id.is_some() {
            let current_role = parse_role(&existing.role)?;
            let role = params.role.unwrap_or(current_role);
            let related_id = match params.related_id {
                Some(related_id) => Some(related_id),
                None if role == current_role => existing.student_id.or(existing.teacher_id),
                None => None,
            };

            changes.link = Some(resolve_link(&txn, role, related_id).await?);
        }

        if changes.username.is_none() && changes.password_hash.is_none() && changes.link.is_none()
        {
            return User::from_entity(existing);
        }

        let user = repo.update(id, changes).await?;
        txn.commit().await?;

        User::from_entity(user)
    }

    /// Deletes an account together with the student or teacher it is linked to.
    ///
    /// Deleting a student account frees the student's seat in their group.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let existing = UserRepository::new(&txn)
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("User", id))?;

        UserRepository::new(&txn).delete(id).await?;

        if let Some(student_id) = existing.student_id {
            let students = StudentRepository::new(&txn);
            if let Some(student) = students.find_by_id(student_id).await? {
                students.delete(student_id).await?;
                CapacityLedger::new(&txn).release(student.group_id).await?;
            }
        }

        if let Some(teacher_id) = existing.teacher_id {
            TeacherRepository::new(&txn).delete(teacher_id).await?;
        }

        txn.commit().await?;

        tracing::info!("Deleted account '{}' (id {})", existing.username, id);

        Ok(())
    }
}

/// Builds the account link for a role after checking the linked row exists.
async fn resolve_link<C: ConnectionTrait>(
    db: &C,
    role: Role,
    related_id: Option<i32>,
) -> Result<AccountLink, AppError> {
    match role {
        Role::Admin => Ok(AccountLink::admin()),
        Role::Student => {
            let student_id = required_related_id(role, related_id)?;
            if StudentRepository::new(db)
                .find_by_id(student_id)
                .await?
                .is_none()
            {
                return Err(DomainError::not_found("Student", student_id).into());
            }
            Ok(AccountLink::student(student_id))
        }
        Role::Teacher => {
            let teacher_id = required_related_id(role, related_id)?;
            if TeacherRepository::new(db)
                .find_by_id(teacher_id)
                .await?
                .is_none()
            {
                return Err(DomainError::not_found("Teacher", teacher_id).into());
            }
            Ok(AccountLink::teacher(teacher_id))
        }
    }
}

fn required_related_id(role: Role, related_id: Option<i32>) -> Result<i32, AppError> {
    related_id.ok_or_else(|| {
        AppError::BadRequest(format!("{} accounts require a related id", role.as_str()))
    })
}

fn username_taken(username: &str) -> AppError {
    AppError::BadRequest(format!("Username '{}' is already taken", username))
}
