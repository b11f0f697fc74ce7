use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::class_type::ClassType;

pub struct ClassTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClassTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String) -> Result<ClassType, DbErr> {
        let entity = entity::class_type::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ClassType::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ClassType>, DbErr> {
        let entity = entity::prelude::ClassType::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ClassType::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<ClassType>, DbErr> {
        let entity = entity::prelude::ClassType::find()
            .filter(entity::class_type::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(ClassType::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<ClassType>, DbErr> {
        let entities = entity::prelude::ClassType::find()
            .order_by_asc(entity::class_type::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ClassType::from_entity).collect())
    }

    pub async fn update(&self, id: i32, name: String) -> Result<ClassType, DbErr> {
        let entity = entity::class_type::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(name),
        }
        .update(self.db)
        .await?;

        Ok(ClassType::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ClassType::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
