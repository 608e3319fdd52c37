// Authorization layer - permission evaluation and per-resource policies
pub mod actor;
pub mod permissions;
pub mod policies;
pub mod response;

pub use actor::Actor;
pub use permissions::PermissionSet;
pub use response::AuthorizationResponse;
