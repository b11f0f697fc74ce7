//! Teacher data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::teacher::{Teacher, TeacherParams};

pub struct TeacherRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeacherRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: TeacherParams) -> Result<Teacher, DbErr> {
        let entity = entity::teacher::ActiveModel {
            last_name: ActiveValue::Set(params.last_name),
            name: ActiveValue::Set(params.name),
            middle_name: ActiveValue::Set(params.middle_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Teacher::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Teacher>, DbErr> {
        let entity = entity::prelude::Teacher::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Teacher::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Teacher>, DbErr> {
        let entity = entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Teacher::from_entity))
    }

    /// Gets teachers ordered by last name, then name.
    ///
    /// # Returns
    /// - `Ok((teachers, total))` - Teachers on the requested page and total teacher count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Teacher>, u64), DbErr> {
        let paginator = entity::prelude::Teacher::find()
            .order_by_asc(entity::teacher::Column::LastName)
            .order_by_asc(entity::teacher::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Teacher::from_entity).collect(), total))
    }

    /// Replaces every column of an existing teacher.
    ///
    /// # Returns
    /// - `Ok(Teacher)` - Updated teacher
    /// - `Err(DbErr::RecordNotUpdated)` - No teacher with that id
    pub async fn update(&self, id: i32, params: TeacherParams) -> Result<Teacher, DbErr> {
        let entity = entity::teacher::ActiveModel {
            id: ActiveValue::Unchanged(id),
            last_name: ActiveValue::Set(params.last_name),
            name: ActiveValue::Set(params.name),
            middle_name: ActiveValue::Set(params.middle_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
        }
        .update(self.db)
        .await?;

        Ok(Teacher::from_entity(entity))
    }

    /// Deletes a teacher. Their schedule entries and account cascade with them.
    ///
    /// # Returns
    /// - `Ok(true)` - Teacher deleted
    /// - `Ok(false)` - No teacher with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Teacher::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
