use sea_orm_migration::{prelude::*, schema::*};

const DEFAULT_STATUSES: [&str; 4] = ["Present", "Absent", "Late", "Excused"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AttendanceStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(AttendanceStatus::Id))
                    .col(string_uniq(AttendanceStatus::Name))
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert();
        insert
            .into_table(AttendanceStatus::Table)
            .columns([AttendanceStatus::Name]);
        for name in DEFAULT_STATUSES {
            insert.values_panic([name.into()]);
        }

        manager.get_connection().execute(&insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AttendanceStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AttendanceStatus {
    Table,
    Id,
    Name,
}
