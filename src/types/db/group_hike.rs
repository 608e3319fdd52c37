use sea_orm::entity::prelude::*;

use crate::types::enums::HikeStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "group_hikes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(indexed)]
    pub organizer_id: String,
    pub company_id: Option<String>,
    pub trail_id: Option<String>,
    pub status: HikeStatus,
    pub starts_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
