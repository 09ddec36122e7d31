//! Create entrupy_items table

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
                    .table(EntrupyItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EntrupyItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EntrupyItems::BagId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(EntrupyItems::CustomerItemId).text().not_null())
                    .col(ColumnDef::new(EntrupyItems::EntrupyItemId).text().null())
                    .col(ColumnDef::new(EntrupyItems::AuthenticationStatus).text().null())
                    .col(ColumnDef::new(EntrupyItems::CertificateUrl).text().null())
                    .col(ColumnDef::new(EntrupyItems::Brand).text().null())
                    .col(ColumnDef::new(EntrupyItems::Model).text().null())
                    .col(ColumnDef::new(EntrupyItems::Style).text().null())
                    .col(ColumnDef::new(EntrupyItems::Color).text().null())
                    .col(ColumnDef::new(EntrupyItems::Material).text().null())
                    .col(ColumnDef::new(EntrupyItems::Dimensions).json_binary().null())
                    .col(ColumnDef::new(EntrupyItems::ConditionGrade).text().null())
                    .col(ColumnDef::new(EntrupyItems::CatalogRaw).json_binary().null())
                    .col(
                        ColumnDef::new(EntrupyItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EntrupyItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entrupy_items_bag")
                            .from(EntrupyItems::Table, EntrupyItems::BagId)
                            .to(Bags::Table, Bags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EntrupyItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum EntrupyItems {
    Table,
    Id,
    BagId,
    CustomerItemId,
    EntrupyItemId,
    AuthenticationStatus,
    CertificateUrl,
    Brand,
    Model,
    Style,
    Color,
    Material,
    Dimensions,
    ConditionGrade,
    CatalogRaw,
    CreatedAt,
    UpdatedAt,
}
