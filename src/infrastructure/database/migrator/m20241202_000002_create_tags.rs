//! Create tags table

use sea_orm_migration::prelude::*;

use super::m20241202_000001_create_bags::Bags;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tags::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tags::TagCode).text().not_null())
                    .col(ColumnDef::new(Tags::BagId).big_integer().null())
                    .col(
                        ColumnDef::new(Tags::Status)
                            .text()
                            .not_null()
                            .default("unassigned"),
                    )
                    .col(
                        ColumnDef::new(Tags::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tags::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tags_bag")
                            .from(Tags::Table, Tags::BagId)
                            .to(Bags::Table, Bags::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_tags_tag_code")
                    .table(Tags::Table)
                    .col(Tags::TagCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tags_bag_id")
                    .table(Tags::Table)
                    .col(Tags::BagId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Tags {
    Table,
    Id,
    TagCode,
    BagId,
    Status,
    CreatedAt,
    UpdatedAt,
}
