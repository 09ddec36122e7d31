//! Tag entity

use sea_orm::entity::prelude::*;

/// Tag binding status as stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum TagStatus {
    #[sea_orm(string_value = "unassigned")]
    Unassigned,
    #[sea_orm(string_value = "assigned")]
    Assigned,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// RFID/NFC code
    #[sea_orm(unique)]
    pub tag_code: String,

    #[sea_orm(nullable)]
    pub bag_id: Option<i64>,

    pub status: TagStatus,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bag::Entity",
        from = "Column::BagId",
        to = "super::bag::Column::Id",
        on_delete = "SetNull"
    )]
    Bag,
}

impl Related<super::bag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
