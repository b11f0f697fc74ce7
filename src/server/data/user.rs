//! User data repository.
//!
//! Returns entity models rather than domain models: converting the stored role string
//! can fail, and that failure belongs to the caller's error type, not `DbErr`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::user::Role,
    server::model::user::{AccountLink, UserChanges},
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account with an already hashed password.
    pub async fn create(
        &self,
        username: String,
        password_hash: String,
        link: AccountLink,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(link.role.as_str().to_string()),
            student_id: ActiveValue::Set(link.student_id),
            teacher_id: ActiveValue::Set(link.teacher_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Checks if any admin account exists.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin exists
    /// - `Ok(false)` - No admin exists (first start)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets accounts ordered by username.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Accounts on the requested page and total account count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities, total))
    }

    /// Applies the given column changes. Unset fields keep their stored value.
    ///
    /// # Returns
    /// - `Ok(Model)` - Updated account
    /// - `Err(DbErr::RecordNotUpdated)` - No account with that id
    pub async fn update(&self, id: i32, changes: UserChanges) -> Result<entity::user::Model, DbErr> {
        let mut model = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };

        if let Some(username) = changes.username {
            model.username = ActiveValue::Set(username);
        }
        if let Some(password_hash) = changes.password_hash {
            model.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(link) = changes.link {
            model.role = ActiveValue::Set(link.role.as_str().to_string());
            model.student_id = ActiveValue::Set(link.student_id);
            model.teacher_id = ActiveValue::Set(link.teacher_id);
        }

        model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
