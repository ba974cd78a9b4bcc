use std::sync::Arc;

use crate::error::StorageError;
use crate::local_storage::{CoreLocalStorage, SessionLocalStorage};
use crate::models::{Role, SessionRecord};

/// Landing page for non-admin sign-ins.
pub const HOME_PAGE: &str = "index.html";
/// Landing page for admins.
pub const ADMIN_PAGE: &str = "admin.html";
/// Entry point of the auth screens.
pub const AUTH_PAGE: &str = "auth.html";

/// Display name used when a signup leaves the name empty.
pub const DEFAULT_ACCOUNT_NAME: &str = "new learner";

/// Maps a sign-in email to a role.
///
/// There is no credential check anywhere in this crate; whatever implements
/// this decides who the site believes you are.
pub trait RoleResolver: Send + Sync {
    fn resolve(&self, email: &str) -> Role;
}

/// Demo resolver: reads the role out of the email address.
/// Anyone can type `admin@...`, so this is only fit for the mock site.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailHeuristicRoles;

impl RoleResolver for EmailHeuristicRoles {
    fn resolve(&self, email: &str) -> Role {
        if email.contains("admin") || email == "admin@arabic.one" {
            Role::Admin
        } else if email.contains("pro") {
            Role::Pro
        } else if email.contains("premium") {
            Role::Premium
        } else {
            Role::User
        }
    }
}

pub struct AuthService {
    sessions: SessionLocalStorage,
    roles: Arc<dyn RoleResolver>,
}

impl AuthService {
    pub fn new(core_storage: CoreLocalStorage, roles: Arc<dyn RoleResolver>) -> Self {
        Self {
            sessions: SessionLocalStorage::new(core_storage),
            roles,
        }
    }

    /// Record a sign-in. The display name is the email's local part.
    pub fn sign_in(&self, email: &str) -> Result<SessionRecord, AuthError> {
        let email = email.trim();
        let role = self.roles.resolve(email);
        let name = email.split('@').next().unwrap_or_default();

        let session = SessionRecord::signed_in(role, email, name);
        self.sessions.save_session(&session)?;

        tracing::info!(%role, "Signed in");
        Ok(session)
    }

    /// Record a new account. Signups always start as plain users.
    pub fn sign_up(&self, full_name: &str, email: &str) -> Result<SessionRecord, AuthError> {
        let full_name = full_name.trim();
        let name = if full_name.is_empty() {
            DEFAULT_ACCOUNT_NAME
        } else {
            full_name
        };

        let session = SessionRecord::signed_in(Role::User, email.trim(), name);
        self.sessions.save_session(&session)?;

        tracing::info!("Signed up new account");
        Ok(session)
    }

    pub fn sign_out(&self) -> Result<(), AuthError> {
        self.sessions.clear_session()?;
        tracing::info!("Signed out");
        Ok(())
    }

    /// Where a freshly signed-in user is sent.
    pub fn landing_page(role: Role) -> &'static str {
        match role {
            Role::Admin => ADMIN_PAGE,
            _ => HOME_PAGE,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
