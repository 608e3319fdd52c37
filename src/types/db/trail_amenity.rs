use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trail_amenities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub trail_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub amenity_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
