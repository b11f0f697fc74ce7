use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_teacher_table::Teacher, m20250601_000002_create_group_table::Group,
    m20250601_000004_create_course_table::Course,
    m20250601_000005_create_class_type_table::ClassType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(pk_auto(Schedule::Id))
                    .col(date(Schedule::Date))
                    .col(time(Schedule::StartTime))
                    .col(time(Schedule::EndTime))
                    .col(integer(Schedule::GroupId))
                    .col(integer(Schedule::CourseId))
                    .col(integer(Schedule::TeacherId))
                    .col(integer(Schedule::ClassTypeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_group_id")
                            .from(Schedule::Table, Schedule::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_course_id")
                            .from(Schedule::Table, Schedule::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_teacher_id")
                            .from(Schedule::Table, Schedule::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_class_type_id")
                            .from(Schedule::Table, Schedule::ClassTypeId)
                            .to(ClassType::Table, ClassType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Conflict lookups always filter by date plus one subject
        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_date_group_id")
                    .table(Schedule::Table)
                    .col(Schedule::Date)
                    .col(Schedule::GroupId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_date_teacher_id")
                    .table(Schedule::Table)
                    .col(Schedule::Date)
                    .col(Schedule::TeacherId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Schedule {
    Table,
    Id,
    Date,
    StartTime,
    EndTime,
    GroupId,
    CourseId,
    TeacherId,
    ClassTypeId,
}
