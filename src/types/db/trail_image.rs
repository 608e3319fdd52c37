use sea_orm::entity::prelude::*;

use crate::types::enums::TrailImageType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trail_images")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub trail_id: String,
    pub media_id: String,
    pub image_type: TrailImageType,
    pub caption: Option<String>,
    pub sort_order: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trail::Entity",
        from = "Column::TrailId",
        to = "super::trail::Column::Id",
        on_delete = "Cascade"
    )]
    Trail,
}

impl Related<super::trail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
