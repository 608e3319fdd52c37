// Coordinators layer - per-endpoint workflow orchestration
pub mod admin_coordinator;
pub mod auth_coordinator;

pub use admin_coordinator::{AdminCoordinator, RegisterUser};
pub use auth_coordinator::{AuthCoordinator, AuthenticatedSession, LoginOutcome};
