// Closed value sets shared by the data model and the policies

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle of a group hike: `draft → published → cancelled | completed`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    poem_openapi::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
#[oai(rename_all = "snake_case")]
pub enum HikeStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "published")]
    Published,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl HikeStatus {
    /// Cancelled and completed hikes are frozen
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }
}

/// Publication state of a trail: `draft → published → archived`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    poem_openapi::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
#[oai(rename_all = "snake_case")]
pub enum TrailStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "published")]
    Published,
    #[sea_orm(string_value = "archived")]
    Archived,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    poem_openapi::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
#[oai(rename_all = "snake_case")]
pub enum TrailDifficulty {
    #[sea_orm(string_value = "easy")]
    Easy,
    #[sea_orm(string_value = "moderate")]
    Moderate,
    #[sea_orm(string_value = "hard")]
    Hard,
    #[sea_orm(string_value = "expert")]
    Expert,
}

/// Role an image plays on a trail page
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    poem_openapi::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
#[oai(rename_all = "snake_case")]
pub enum TrailImageType {
    #[sea_orm(string_value = "featured")]
    Featured,
    #[sea_orm(string_value = "gallery")]
    Gallery,
    #[sea_orm(string_value = "map")]
    Map,
    #[sea_orm(string_value = "trailhead")]
    Trailhead,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hike_status_terminal() {
        assert!(HikeStatus::Cancelled.is_terminal());
        assert!(HikeStatus::Completed.is_terminal());
        assert!(!HikeStatus::Draft.is_terminal());
        assert!(!HikeStatus::Published.is_terminal());
    }

    #[test]
    fn test_enum_string_values() {
        assert_eq!(HikeStatus::Published.to_value(), "published");
        assert_eq!(TrailDifficulty::Expert.to_value(), "expert");
        assert_eq!(TrailImageType::Trailhead.to_value(), "trailhead");
        assert_eq!(TrailStatus::Archived.to_value(), "archived");
    }
}
