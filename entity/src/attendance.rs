use sea_orm::entity::prelude::*;

/// A single attendance mark. The migration adds a unique index over
/// `(schedule_id, student_id)`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub schedule_id: i32,
    pub student_id: i32,
    pub status_id: i32,
    pub marked_time: Time,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schedule::Entity",
        from = "Column::ScheduleId",
        to = "super::schedule::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Schedule,
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::attendance_status::Entity",
        from = "Column::StatusId",
        to = "super::attendance_status::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AttendanceStatus,
}

impl Related<super::schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedule.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::attendance_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceStatus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
