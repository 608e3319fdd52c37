use crate::authz::permissions::{MEDIA_CREATE, MEDIA_DELETE, MEDIA_UPDATE, MEDIA_VIEW};
use crate::authz::policies::RoleGatedPolicy;
use crate::types::db::media;

pub struct MediaPolicy;

impl RoleGatedPolicy for MediaPolicy {
    type Resource = media::Model;

    const RESOURCE: &'static str = "media";
    const VIEW: &'static str = MEDIA_VIEW;
    const CREATE: &'static str = MEDIA_CREATE;
    const UPDATE: &'static str = MEDIA_UPDATE;
    const DELETE: &'static str = MEDIA_DELETE;
}
