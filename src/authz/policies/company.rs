use crate::authz::permissions::{
    COMPANIES_CREATE, COMPANIES_DELETE, COMPANIES_UPDATE, COMPANIES_VIEW, GROUP_HIKES_VIEW,
    GROUP_HIKES_VIEW_ALL,
};
use crate::authz::policies::gate;
use crate::authz::{Actor, AuthorizationResponse};
use crate::types::db::company;

/// Companies are visible to anyone who can see group hikes, since hikes
/// are listed together with their company.
pub struct CompanyPolicy;

const VISIBILITY: [&str; 3] = [GROUP_HIKES_VIEW, GROUP_HIKES_VIEW_ALL, COMPANIES_VIEW];

impl CompanyPolicy {
    pub fn view_any(actor: &Actor) -> AuthorizationResponse {
        AuthorizationResponse::allow_if(
            actor.has_any_permission(&VISIBILITY),
            "You do not have permission to view companies.",
        )
    }

    pub fn view(actor: &Actor, _company: &company::Model) -> AuthorizationResponse {
        AuthorizationResponse::allow_if(
            actor.has_any_permission(&VISIBILITY),
            "You do not have permission to view this company.",
        )
    }

    pub fn create(actor: &Actor) -> AuthorizationResponse {
        gate(actor, COMPANIES_CREATE, "create", "companies")
    }

    pub fn update(actor: &Actor, _company: &company::Model) -> AuthorizationResponse {
        gate(actor, COMPANIES_UPDATE, "update", "companies")
    }

    pub fn delete(actor: &Actor, _company: &company::Model) -> AuthorizationResponse {
        gate(actor, COMPANIES_DELETE, "delete", "companies")
    }
}
