// Database entities - SeaORM models
pub mod activity_log;
pub mod amenity;
pub mod auth_session;
pub mod company;
pub mod group_hike;
pub mod media;
pub mod region;
pub mod role;
pub mod trail;
pub mod trail_amenity;
pub mod trail_image;
pub mod user;
