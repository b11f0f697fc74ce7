//! Student data repository.
//!
//! Only touches the `students` table. Keeping group counters in step is the caller's
//! job (see the capacity ledger).

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::student::{Student, StudentParams};

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: StudentParams) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            last_name: ActiveValue::Set(params.last_name),
            name: ActiveValue::Set(params.name),
            middle_name: ActiveValue::Set(params.middle_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            group_id: ActiveValue::Set(params.group_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Gets every student in a group ordered by last name, then name.
    pub async fn find_by_group(&self, group_id: i32) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::GroupId.eq(group_id))
            .order_by_asc(entity::student::Column::LastName)
            .order_by_asc(entity::student::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    pub async fn count_by_group(&self, group_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::GroupId.eq(group_id))
            .count(self.db)
            .await
    }

    /// Gets students ordered by last name, then name.
    ///
    /// # Returns
    /// - `Ok((students, total))` - Students on the requested page and total student count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Student>, u64), DbErr> {
        let paginator = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::LastName)
            .order_by_asc(entity::student::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Student::from_entity).collect(), total))
    }

    pub async fn update(&self, id: i32, params: StudentParams) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            id: ActiveValue::Unchanged(id),
            last_name: ActiveValue::Set(params.last_name),
            name: ActiveValue::Set(params.name),
            middle_name: ActiveValue::Set(params.middle_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            group_id: ActiveValue::Set(params.group_id),
        }
        .update(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
