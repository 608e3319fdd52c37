//! One policy per resource type.
//!
//! Policies are stateless: every check is a pure function of the acting
//! user and, where relevant, the target resource.

pub mod activity_log;
pub mod amenity;
pub mod company;
pub mod group_hike;
pub mod media;
pub mod trail;
pub mod user;

pub use activity_log::ActivityLogPolicy;
pub use amenity::AmenityPolicy;
pub use company::CompanyPolicy;
pub use group_hike::GroupHikePolicy;
pub use media::MediaPolicy;
pub use trail::TrailPolicy;
pub use user::UserPolicy;

use crate::authz::{Actor, AuthorizationResponse};

/// Policy for resources gated purely by role, with no ownership or state rules
///
/// Each check is a single permission lookup against a fixed string.
pub trait RoleGatedPolicy {
    type Resource;

    /// Plural noun used in deny messages
    const RESOURCE: &'static str;
    const VIEW: &'static str;
    const CREATE: &'static str;
    const UPDATE: &'static str;
    const DELETE: &'static str;

    fn view_any(actor: &Actor) -> AuthorizationResponse {
        gate(actor, Self::VIEW, "view", Self::RESOURCE)
    }

    fn view(actor: &Actor, _resource: &Self::Resource) -> AuthorizationResponse {
        gate(actor, Self::VIEW, "view", Self::RESOURCE)
    }

    fn create(actor: &Actor) -> AuthorizationResponse {
        gate(actor, Self::CREATE, "create", Self::RESOURCE)
    }

    fn update(actor: &Actor, _resource: &Self::Resource) -> AuthorizationResponse {
        gate(actor, Self::UPDATE, "update", Self::RESOURCE)
    }

    fn delete(actor: &Actor, _resource: &Self::Resource) -> AuthorizationResponse {
        gate(actor, Self::DELETE, "delete", Self::RESOURCE)
    }
}

pub(crate) fn gate(
    actor: &Actor,
    permission: &str,
    verb: &str,
    resource: &str,
) -> AuthorizationResponse {
    AuthorizationResponse::allow_if(
        actor.has_permission(permission),
        format!("You do not have permission to {} {}.", verb, resource),
    )
}
