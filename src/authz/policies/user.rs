use crate::authz::permissions::{
    USERS_CREATE, USERS_DELETE, USERS_FORCE_DELETE, USERS_MANAGE_ROLES, USERS_RESTORE,
    USERS_UPDATE, USERS_VIEW,
};
use crate::authz::{Actor, AuthorizationResponse};
use crate::types::db::user;

/// User management.
///
/// Super-admin accounts are shielded: only another super-admin can act on
/// them, and that check runs before any permission lookup. Nobody can
/// delete their own account.
pub struct UserPolicy;

impl UserPolicy {
    /// False when the target is a super-admin and the actor is not
    pub fn can_manage_user(actor: &Actor, target: &user::Model) -> bool {
        !target.is_super_admin || actor.is_super_admin
    }

    pub fn view_any(actor: &Actor) -> AuthorizationResponse {
        AuthorizationResponse::allow_if(
            actor.has_permission(USERS_VIEW),
            "You do not have permission to view users.",
        )
    }

    pub fn view(actor: &Actor, target: &user::Model) -> AuthorizationResponse {
        if !Self::can_manage_user(actor, target) {
            return AuthorizationResponse::deny("You cannot view a super admin account.");
        }

        AuthorizationResponse::allow_if(
            actor.has_permission(USERS_VIEW),
            "You do not have permission to view this user.",
        )
    }

    pub fn create(actor: &Actor) -> AuthorizationResponse {
        AuthorizationResponse::allow_if(
            actor.has_permission(USERS_CREATE),
            "You do not have permission to create users.",
        )
    }

    pub fn update(actor: &Actor, target: &user::Model) -> AuthorizationResponse {
        if !Self::can_manage_user(actor, target) {
            return AuthorizationResponse::deny("You cannot update a super admin account.");
        }

        AuthorizationResponse::allow_if(
            actor.has_permission(USERS_UPDATE),
            "You do not have permission to update this user.",
        )
    }

    pub fn delete(actor: &Actor, target: &user::Model) -> AuthorizationResponse {
        if !Self::can_manage_user(actor, target) {
            return AuthorizationResponse::deny("You cannot delete a super admin account.");
        }

        if actor.id == target.id {
            return AuthorizationResponse::deny("You cannot delete your own account.");
        }

        AuthorizationResponse::allow_if(
            actor.has_permission(USERS_DELETE),
            "You do not have permission to delete this user.",
        )
    }

    pub fn manage_roles(actor: &Actor, target: &user::Model) -> AuthorizationResponse {
        if !Self::can_manage_user(actor, target) {
            return AuthorizationResponse::deny("You cannot change the role of a super admin account.");
        }

        AuthorizationResponse::allow_if(
            actor.has_permission(USERS_MANAGE_ROLES),
            "You do not have permission to manage user roles.",
        )
    }

    pub fn restore(actor: &Actor, target: &user::Model) -> AuthorizationResponse {
        if !Self::can_manage_user(actor, target) {
            return AuthorizationResponse::deny("You cannot restore a super admin account.");
        }

        AuthorizationResponse::allow_if(
            actor.has_permission(USERS_RESTORE),
            "You do not have permission to restore this user.",
        )
    }

    pub fn force_delete(actor: &Actor, target: &user::Model) -> AuthorizationResponse {
        if !Self::can_manage_user(actor, target) {
            return AuthorizationResponse::deny("You cannot permanently delete a super admin account.");
        }

        if actor.id == target.id {
            return AuthorizationResponse::deny("You cannot permanently delete your own account.");
        }

        AuthorizationResponse::allow_if(
            actor.has_permission(USERS_FORCE_DELETE),
            "You do not have permission to permanently delete this user.",
        )
    }

    /// Only a super-admin can grant super-admin status. No permission string applies.
    pub fn assign_super_admin(actor: &Actor) -> AuthorizationResponse {
        AuthorizationResponse::allow_if(
            actor.is_super_admin,
            "Only a super admin can grant super admin access.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authz::policies::fixtures::{actor, super_admin, user};

    const EVERYTHING: &[&str] = &["users.*"];

    type TargetedCheck = fn(&Actor, &user::Model) -> AuthorizationResponse;

    const TARGETED: [(&str, TargetedCheck); 6] = [
        ("view", UserPolicy::view),
        ("update", UserPolicy::update),
        ("delete", UserPolicy::delete),
        ("manage_roles", UserPolicy::manage_roles),
        ("restore", UserPolicy::restore),
        ("force_delete", UserPolicy::force_delete),
    ];

    #[test]
    fn test_super_admin_target_shielded_from_everyone_else() {
        let admin = actor("admin", None, EVERYTHING);
        let wildcard = actor("wild", None, &["*"]);
        let target = user("root", true);

        for (name, check) in TARGETED {
            assert!(check(&admin, &target).denied(), "{name} should deny users.*");
            assert!(check(&wildcard, &target).denied(), "{name} should deny *");
        }
    }

    #[test]
    fn test_super_admin_manages_other_super_admin() {
        let root = super_admin("root");
        let other = user("root-2", true);

        for (name, check) in TARGETED {
            assert!(check(&root, &other).allowed(), "{name} should allow");
        }
    }

    #[test]
    fn test_shield_message_wins_over_missing_permission() {
        let nobody = actor("nobody", None, &[]);
        let response = UserPolicy::update(&nobody, &user("root", true));
        assert_eq!(response.message(), Some("You cannot update a super admin account."));
    }

    #[test]
    fn test_cannot_delete_self() {
        let me = actor("me", None, &["users.delete", "users.force_delete"]);
        let myself = user("me", false);

        assert_eq!(
            UserPolicy::delete(&me, &myself).message(),
            Some("You cannot delete your own account.")
        );
        assert_eq!(
            UserPolicy::force_delete(&me, &myself).message(),
            Some("You cannot permanently delete your own account.")
        );
    }

    #[test]
    fn test_super_admin_cannot_delete_self() {
        let root = super_admin("root");
        let myself = user("root", true);
        assert!(UserPolicy::delete(&root, &myself).denied());
        assert!(UserPolicy::force_delete(&root, &myself).denied());
    }

    #[test]
    fn test_regular_targets_follow_permissions() {
        let admin = actor("admin", None, EVERYTHING);
        let target = user("bob", false);
        for (name, check) in TARGETED {
            assert!(check(&admin, &target).allowed(), "{name} should allow");
        }

        let viewer = actor("viewer", None, &["users.view"]);
        assert!(UserPolicy::view(&viewer, &target).allowed());
        assert!(UserPolicy::update(&viewer, &target).denied());
        assert!(UserPolicy::manage_roles(&viewer, &target).denied());
    }

    #[test]
    fn test_view_any_and_create() {
        assert!(UserPolicy::view_any(&actor("a", None, &["users.view"])).allowed());
        assert!(UserPolicy::view_any(&actor("a", None, &["users.create"])).denied());
        assert!(UserPolicy::create(&actor("a", None, &["users.create"])).allowed());
        assert_eq!(
            UserPolicy::create(&actor("a", None, &[])).message(),
            Some("You do not have permission to create users.")
        );
    }

    #[test]
    fn test_assign_super_admin_ignores_permissions() {
        assert!(UserPolicy::assign_super_admin(&super_admin("root")).allowed());
        assert!(UserPolicy::assign_super_admin(&actor("wild", None, &["*"])).denied());
    }
}
