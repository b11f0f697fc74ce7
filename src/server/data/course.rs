//! Course data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::course::{Course, CourseParams};

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CourseParams) -> Result<Course, DbErr> {
        let entity = entity::course::ActiveModel {
            name: ActiveValue::Set(params.name),
            lecture_count: ActiveValue::Set(params.lecture_count),
            seminar_count: ActiveValue::Set(params.seminar_count),
            lab_count: ActiveValue::Set(params.lab_count),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Course::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find()
            .filter(entity::course::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Course::from_entity))
    }

    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Course>, u64), DbErr> {
        let paginator = entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Course::from_entity).collect(), total))
    }

    pub async fn update(&self, id: i32, params: CourseParams) -> Result<Course, DbErr> {
        let entity = entity::course::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(params.name),
            lecture_count: ActiveValue::Set(params.lecture_count),
            seminar_count: ActiveValue::Set(params.seminar_count),
            lab_count: ActiveValue::Set(params.lab_count),
        }
        .update(self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Course::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
