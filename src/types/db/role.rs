use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,

    // Ordered permission strings (JSON array)
    #[sea_orm(column_type = "Text")]
    pub permissions: String,

    // System roles are seeded at install time and cannot be deleted
    pub is_system: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Model {
    /// Decode the JSON permission column
    pub fn permission_strings(&self) -> Result<Vec<String>, serde_json::Error> {
        serde_json::from_str(&self.permissions)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user::Entity")]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
