//! Create `items` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(pk_auto(Items::Id))
                    .col(string_len(Items::Name, 128).not_null())
                    .col(
                        ColumnDef::new(Items::Description)
                            .string_len(1024)
                            .null(),
                    )
                    .col(timestamp_with_time_zone(Items::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Items::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Items::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Items { Table, Id, Name, Description, CreatedAt, UpdatedAt }
