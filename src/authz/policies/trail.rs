use crate::authz::permissions::{
    TRAILS_CREATE, TRAILS_DELETE, TRAILS_UPDATE, TRAILS_UPDATE_STATUS, TRAILS_VIEW,
};
use crate::authz::policies::{RoleGatedPolicy, gate};
use crate::authz::{Actor, AuthorizationResponse};
use crate::types::db::trail;

pub struct TrailPolicy;

impl RoleGatedPolicy for TrailPolicy {
    type Resource = trail::Model;

    const RESOURCE: &'static str = "trails";
    const VIEW: &'static str = TRAILS_VIEW;
    const CREATE: &'static str = TRAILS_CREATE;
    const UPDATE: &'static str = TRAILS_UPDATE;
    const DELETE: &'static str = TRAILS_DELETE;
}

impl TrailPolicy {
    /// Publish or archive a trail
    pub fn update_status(actor: &Actor, _trail: &trail::Model) -> AuthorizationResponse {
        gate(actor, TRAILS_UPDATE_STATUS, "change the status of", "trails")
    }
}
