use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000003_create_student_table::Student,
    m20250601_000006_create_schedule_table::Schedule,
    m20250601_000007_create_attendance_status_table::AttendanceStatus,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendance::Id))
                    .col(integer(Attendance::ScheduleId))
                    .col(integer(Attendance::StudentId))
                    .col(integer(Attendance::StatusId))
                    .col(time(Attendance::MarkedTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_schedule_id")
                            .from(Attendance::Table, Attendance::ScheduleId)
                            .to(Schedule::Table, Schedule::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_student_id")
                            .from(Attendance::Table, Attendance::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_status_id")
                            .from(Attendance::Table, Attendance::StatusId)
                            .to(AttendanceStatus::Table, AttendanceStatus::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One record per student per class
        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_schedule_student")
                    .table(Attendance::Table)
                    .col(Attendance::ScheduleId)
                    .col(Attendance::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_attendance_schedule_student")
                    .table(Attendance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attendance {
    Table,
    Id,
    ScheduleId,
    StudentId,
    StatusId,
    MarkedTime,
}
