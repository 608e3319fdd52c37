use sea_orm::entity::prelude::*;

use crate::types::enums::{TrailDifficulty, TrailStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trails")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub region_id: Option<String>,
    pub status: TrailStatus,
    pub difficulty: TrailDifficulty,
    pub length_km: Option<f64>,
    pub elevation_gain_m: Option<i32>,
    pub featured_media_id: Option<String>,
    pub created_by: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::RegionId",
        to = "super::region::Column::Id",
        on_delete = "SetNull"
    )]
    Region,
    #[sea_orm(has_many = "super::trail_image::Entity")]
    TrailImage,
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl Related<super::trail_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrailImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
