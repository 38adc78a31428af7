//! Create `memberships` table with FKs to `groups` and `items`.
//!
//! Association rows are removed together with either side.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Memberships::Table)
                    .if_not_exists()
                    .col(pk_auto(Memberships::Id))
                    .col(integer(Memberships::GroupId).not_null())
                    .col(integer(Memberships::ItemId).not_null())
                    .col(timestamp_with_time_zone(Memberships::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Memberships::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_membership_group")
                            .from(Memberships::Table, Memberships::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_membership_item")
                            .from(Memberships::Table, Memberships::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Memberships::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Memberships { Table, Id, GroupId, ItemId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Groups { Table, Id }

#[derive(DeriveIden)]
enum Items { Table, Id }
