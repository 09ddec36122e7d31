//! Create bags table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bags::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bags::ExternalBagId).text().null())
                    .col(ColumnDef::new(Bags::DisplayName).text().not_null())
                    .col(ColumnDef::new(Bags::Brand).text().not_null())
                    .col(ColumnDef::new(Bags::Model).text().null())
                    .col(ColumnDef::new(Bags::Style).text().null())
                    .col(ColumnDef::new(Bags::Color).text().null())
                    .col(ColumnDef::new(Bags::Material).text().null())
                    .col(
                        ColumnDef::new(Bags::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bags::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_bags_external_bag_id")
                    .table(Bags::Table)
                    .col(Bags::ExternalBagId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bags::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Bags {
    Table,
    Id,
    ExternalBagId,
    DisplayName,
    Brand,
    Model,
    Style,
    Color,
    Material,
    CreatedAt,
    UpdatedAt,
}
