use crate::authz::permissions::{
    GROUP_HIKES_CREATE, GROUP_HIKES_DELETE, GROUP_HIKES_DELETE_ALL, GROUP_HIKES_UPDATE,
    GROUP_HIKES_UPDATE_ALL, GROUP_HIKES_VIEW, GROUP_HIKES_VIEW_ALL,
};
use crate::authz::{Actor, AuthorizationResponse};
use crate::types::db::group_hike;
use crate::types::enums::HikeStatus;

pub const FROZEN_HIKE_MESSAGE: &str = "Cannot update a cancelled or completed hike.";
pub const CANCEL_REQUIRES_PUBLISHED_MESSAGE: &str = "Only published hikes can be cancelled.";
pub const DELETE_REQUIRES_DRAFT_MESSAGE: &str = "Only draft hikes can be deleted.";

/// Group hikes combine role permissions with ownership and lifecycle state.
///
/// The `_all` permissions ignore ownership. The scoped permissions apply
/// only to hikes the actor organizes or that belong to the actor's company.
pub struct GroupHikePolicy;

impl GroupHikePolicy {
    /// Organizer or same company
    pub fn owns(actor: &Actor, hike: &group_hike::Model) -> bool {
        hike.organizer_id == actor.id || actor.shares_company(hike.company_id.as_deref())
    }

    pub fn view_any(actor: &Actor) -> AuthorizationResponse {
        AuthorizationResponse::allow_if(
            actor.has_any_permission(&[GROUP_HIKES_VIEW, GROUP_HIKES_VIEW_ALL]),
            "You do not have permission to view group hikes.",
        )
    }

    pub fn view(actor: &Actor, hike: &group_hike::Model) -> AuthorizationResponse {
        if actor.has_permission(GROUP_HIKES_VIEW_ALL) {
            return AuthorizationResponse::allow();
        }

        if actor.has_permission(GROUP_HIKES_VIEW) && Self::owns(actor, hike) {
            return AuthorizationResponse::allow();
        }

        AuthorizationResponse::deny("You do not have permission to view this group hike.")
    }

    pub fn create(actor: &Actor) -> AuthorizationResponse {
        AuthorizationResponse::allow_if(
            actor.has_permission(GROUP_HIKES_CREATE),
            "You do not have permission to create group hikes.",
        )
    }

    pub fn update(actor: &Actor, hike: &group_hike::Model) -> AuthorizationResponse {
        if hike.status.is_terminal() {
            return AuthorizationResponse::deny(FROZEN_HIKE_MESSAGE);
        }

        Self::scoped_update(actor, hike, "You do not have permission to update this group hike.")
    }

    pub fn publish(actor: &Actor, hike: &group_hike::Model) -> AuthorizationResponse {
        Self::scoped_update(actor, hike, "You do not have permission to publish this group hike.")
    }

    pub fn delete(actor: &Actor, hike: &group_hike::Model) -> AuthorizationResponse {
        if actor.has_permission(GROUP_HIKES_DELETE_ALL) {
            return AuthorizationResponse::allow();
        }

        if actor.has_permission(GROUP_HIKES_DELETE) && Self::owns(actor, hike) {
            return AuthorizationResponse::allow_if(
                hike.status == HikeStatus::Draft,
                DELETE_REQUIRES_DRAFT_MESSAGE,
            );
        }

        AuthorizationResponse::deny("You do not have permission to delete this group hike.")
    }

    pub fn cancel(actor: &Actor, hike: &group_hike::Model) -> AuthorizationResponse {
        if hike.status != HikeStatus::Published {
            return AuthorizationResponse::deny(CANCEL_REQUIRES_PUBLISHED_MESSAGE);
        }

        Self::scoped_update(actor, hike, "You do not have permission to cancel this group hike.")
    }

    fn scoped_update(
        actor: &Actor,
        hike: &group_hike::Model,
        denial: &str,
    ) -> AuthorizationResponse {
        if actor.has_permission(GROUP_HIKES_UPDATE_ALL) {
            return AuthorizationResponse::allow();
        }

        AuthorizationResponse::allow_if(
            actor.has_permission(GROUP_HIKES_UPDATE) && Self::owns(actor, hike),
            denial,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authz::policies::fixtures::{actor, hike};

    const ALL_STATUSES: [HikeStatus; 4] = [
        HikeStatus::Draft,
        HikeStatus::Published,
        HikeStatus::Cancelled,
        HikeStatus::Completed,
    ];

    #[test]
    fn test_view_all_sees_everything() {
        let a = actor("a", None, &["group_hikes.view_all"]);
        assert!(GroupHikePolicy::view(&a, &hike("b", Some("c9"), HikeStatus::Draft)).allowed());
    }

    #[test]
    fn test_scoped_view() {
        let a = actor("a", Some("c1"), &["group_hikes.view"]);

        assert!(GroupHikePolicy::view(&a, &hike("a", None, HikeStatus::Draft)).allowed());
        assert!(GroupHikePolicy::view(&a, &hike("b", Some("c1"), HikeStatus::Draft)).allowed());
        assert!(GroupHikePolicy::view(&a, &hike("b", Some("c2"), HikeStatus::Draft)).denied());
        assert!(GroupHikePolicy::view(&a, &hike("b", None, HikeStatus::Draft)).denied());
    }

    #[test]
    fn test_company_member_updates_colleagues_hike() {
        let a = actor("a", Some("c1"), &["group_hikes.update"]);
        let draft = hike("b", Some("c1"), HikeStatus::Draft);
        assert!(GroupHikePolicy::update(&a, &draft).allowed());

        let completed = hike("b", Some("c1"), HikeStatus::Completed);
        let response = GroupHikePolicy::update(&a, &completed);
        assert_eq!(response.message(), Some("Cannot update a cancelled or completed hike."));
    }

    #[test]
    fn test_update_state_check_runs_before_update_all() {
        let a = actor("a", None, &["group_hikes.update_all"]);
        for status in [HikeStatus::Cancelled, HikeStatus::Completed] {
            let response = GroupHikePolicy::update(&a, &hike("b", None, status));
            assert_eq!(response.message(), Some(FROZEN_HIKE_MESSAGE));
        }
        assert!(GroupHikePolicy::update(&a, &hike("b", None, HikeStatus::Published)).allowed());
    }

    #[test]
    fn test_update_outside_ownership_denied() {
        let a = actor("a", Some("c1"), &["group_hikes.update"]);
        let response = GroupHikePolicy::update(&a, &hike("b", Some("c2"), HikeStatus::Draft));
        assert_eq!(
            response.message(),
            Some("You do not have permission to update this group hike.")
        );
    }

    #[test]
    fn test_publish_has_no_state_gate() {
        let a = actor("a", None, &["group_hikes.update"]);
        for status in ALL_STATUSES {
            assert!(GroupHikePolicy::publish(&a, &hike("a", None, status)).allowed());
        }
        assert!(GroupHikePolicy::publish(&a, &hike("b", None, HikeStatus::Draft)).denied());
    }

    #[test]
    fn test_organizer_deletes_only_drafts() {
        let a = actor("a", None, &["group_hikes.delete"]);
        assert!(GroupHikePolicy::delete(&a, &hike("a", None, HikeStatus::Draft)).allowed());

        let response = GroupHikePolicy::delete(&a, &hike("a", None, HikeStatus::Published));
        assert_eq!(response.message(), Some(DELETE_REQUIRES_DRAFT_MESSAGE));
    }

    #[test]
    fn test_delete_all_ignores_state_and_ownership() {
        let a = actor("a", None, &["group_hikes.delete_all"]);
        for status in ALL_STATUSES {
            assert!(GroupHikePolicy::delete(&a, &hike("b", Some("c2"), status)).allowed());
        }
    }

    #[test]
    fn test_delete_not_owned() {
        let a = actor("a", None, &["group_hikes.delete"]);
        assert!(GroupHikePolicy::delete(&a, &hike("b", None, HikeStatus::Draft)).denied());
    }

    #[test]
    fn test_cancel_only_from_published() {
        let a = actor("a", None, &["group_hikes.update_all"]);
        for status in ALL_STATUSES {
            let response = GroupHikePolicy::cancel(&a, &hike("a", None, status));
            if status == HikeStatus::Published {
                assert!(response.allowed());
            } else {
                assert_eq!(response.message(), Some(CANCEL_REQUIRES_PUBLISHED_MESSAGE));
            }
        }
    }

    #[test]
    fn test_cancel_uses_update_ownership() {
        let a = actor("a", Some("c1"), &["group_hikes.update"]);
        assert!(GroupHikePolicy::cancel(&a, &hike("b", Some("c1"), HikeStatus::Published)).allowed());
        assert!(GroupHikePolicy::cancel(&a, &hike("b", Some("c2"), HikeStatus::Published)).denied());
    }

    #[test]
    fn test_view_any_and_create() {
        assert!(GroupHikePolicy::view_any(&actor("a", None, &["group_hikes.view"])).allowed());
        assert!(GroupHikePolicy::view_any(&actor("a", None, &["group_hikes.view_all"])).allowed());
        assert!(GroupHikePolicy::view_any(&actor("a", None, &[])).denied());
        assert!(GroupHikePolicy::create(&actor("a", None, &["group_hikes.*"])).allowed());
        assert!(GroupHikePolicy::create(&actor("a", None, &["group_hikes.view"])).denied());
    }
}
