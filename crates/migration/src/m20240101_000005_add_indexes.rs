use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Membership: one row per (group, item) pair
        manager
            .create_index(
                Index::create()
                    .name("uniq_membership_group_item")
                    .table(Memberships::Table)
                    .col(Memberships::GroupId)
                    .col(Memberships::ItemId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Membership: lookups by item (group side is covered by the unique index prefix)
        manager
            .create_index(
                Index::create()
                    .name("idx_membership_item")
                    .table(Memberships::Table)
                    .col(Memberships::ItemId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_membership_item").table(Memberships::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_membership_group_item").table(Memberships::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Memberships { Table, GroupId, ItemId }
