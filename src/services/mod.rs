pub mod access_service;
pub mod auth_service;

pub use access_service::{AccessDecision, AccessService};
pub use auth_service::{AuthError, AuthService, EmailHeuristicRoles, RoleResolver};
