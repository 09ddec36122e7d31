//! Entrupy authentication entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "entrupy_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// One record per bag
    #[sea_orm(unique)]
    pub bag_id: i64,

    pub customer_item_id: String,

    #[sea_orm(nullable)]
    pub entrupy_item_id: Option<String>,

    #[sea_orm(nullable)]
    pub authentication_status: Option<String>,

    #[sea_orm(nullable)]
    pub certificate_url: Option<String>,

    #[sea_orm(nullable)]
    pub brand: Option<String>,

    #[sea_orm(nullable)]
    pub model: Option<String>,

    #[sea_orm(nullable)]
    pub style: Option<String>,

    #[sea_orm(nullable)]
    pub color: Option<String>,

    #[sea_orm(nullable)]
    pub material: Option<String>,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub dimensions: Option<Json>,

    #[sea_orm(nullable)]
    pub condition_grade: Option<String>,

    /// Raw catalog payload from Entrupy, passed through untouched
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub catalog_raw: Option<Json>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bag::Entity",
        from = "Column::BagId",
        to = "super::bag::Column::Id",
        on_delete = "Cascade"
    )]
    Bag,
}

impl Related<super::bag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
