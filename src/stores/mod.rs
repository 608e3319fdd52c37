// Stores layer - Data access over SeaORM
pub mod activity_log_store;
pub mod credential_store;
pub mod dashboard_store;
pub mod role_store;
pub mod user_store;

pub use activity_log_store::{ActivityLogStore, NewActivity};
pub use credential_store::{CredentialStore, NewUser};
pub use dashboard_store::DashboardStore;
pub use role_store::RoleStore;
pub use user_store::{UserStore, UserWithRole};
