use crate::authz::permissions::{
    ACTIVITY_LOGS_CREATE, ACTIVITY_LOGS_DELETE, ACTIVITY_LOGS_UPDATE, ACTIVITY_LOGS_VIEW,
};
use crate::authz::policies::RoleGatedPolicy;
use crate::types::db::activity_log;

pub struct ActivityLogPolicy;

impl RoleGatedPolicy for ActivityLogPolicy {
    type Resource = activity_log::Model;

    const RESOURCE: &'static str = "activity logs";
    const VIEW: &'static str = ACTIVITY_LOGS_VIEW;
    const CREATE: &'static str = ACTIVITY_LOGS_CREATE;
    const UPDATE: &'static str = ACTIVITY_LOGS_UPDATE;
    const DELETE: &'static str = ACTIVITY_LOGS_DELETE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authz::policies::fixtures::{actor, super_admin};

    #[test]
    fn test_view_any() {
        assert!(ActivityLogPolicy::view_any(&actor("u1", None, &["activity_logs.view"])).allowed());
        assert!(ActivityLogPolicy::view_any(&super_admin("root")).allowed());

        let denied = ActivityLogPolicy::view_any(&actor("u2", None, &["users.view"]));
        assert_eq!(denied.message(), Some("You do not have permission to view activity logs."));
    }
}
