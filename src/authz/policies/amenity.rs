use crate::authz::permissions::{AMENITIES_CREATE, AMENITIES_DELETE, AMENITIES_UPDATE, AMENITIES_VIEW};
use crate::authz::policies::RoleGatedPolicy;
use crate::types::db::amenity;

pub struct AmenityPolicy;

impl RoleGatedPolicy for AmenityPolicy {
    type Resource = amenity::Model;

    const RESOURCE: &'static str = "amenities";
    const VIEW: &'static str = AMENITIES_VIEW;
    const CREATE: &'static str = AMENITIES_CREATE;
    const UPDATE: &'static str = AMENITIES_UPDATE;
    const DELETE: &'static str = AMENITIES_DELETE;
}
