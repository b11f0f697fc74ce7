use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassType::Table)
                    .if_not_exists()
                    .col(pk_auto(ClassType::Id))
                    .col(string_uniq(ClassType::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClassType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClassType {
    #[sea_orm(iden = "class_types")]
    Table,
    Id,
    Name,
}
