use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::attendance_status::AttendanceStatus;

pub struct AttendanceStatusRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttendanceStatusRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String) -> Result<AttendanceStatus, DbErr> {
        let entity = entity::attendance_status::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AttendanceStatus::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<AttendanceStatus>, DbErr> {
        let entity = entity::prelude::AttendanceStatus::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(AttendanceStatus::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<AttendanceStatus>, DbErr> {
        let entity = entity::prelude::AttendanceStatus::find()
            .filter(entity::attendance_status::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(AttendanceStatus::from_entity))
    }

    /// Gets every status in insertion order, so seeded statuses come first.
    pub async fn get_all(&self) -> Result<Vec<AttendanceStatus>, DbErr> {
        let entities = entity::prelude::AttendanceStatus::find()
            .order_by_asc(entity::attendance_status::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(AttendanceStatus::from_entity)
            .collect())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AttendanceStatus::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
