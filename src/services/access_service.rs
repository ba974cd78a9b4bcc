use crate::local_storage::{CoreLocalStorage, SessionLocalStorage};
use crate::models::{Role, SessionRecord};
use crate::services::auth_service::AUTH_PAGE;

/// Result of the admin page gate.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessDecision {
    Granted(SessionRecord),
    /// Send the visitor to this relative URL instead.
    Redirect(String),
}

/// Client-side role gate for the admin page.
///
/// This only decides what the page renders. Anyone able to edit the stored
/// session passes it; real authorization has to happen on a server.
pub struct AccessService {
    sessions: SessionLocalStorage,
}

impl AccessService {
    pub fn new(core_storage: CoreLocalStorage) -> Self {
        Self {
            sessions: SessionLocalStorage::new(core_storage),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.sessions.is_logged_in()
    }

    pub fn is_admin(&self) -> bool {
        self.sessions.get_role() == Some(Role::Admin)
    }

    /// Gate a page that needs an admin session. `destination` is recorded
    /// in the redirect so the auth screens know where the visitor was going.
    pub fn require_admin(&self, destination: &str) -> AccessDecision {
        match self.sessions.get_session() {
            Some(session) if session.logged_in && session.role == Some(Role::Admin) => {
                AccessDecision::Granted(session)
            }
            session => {
                tracing::info!(
                    role = session.as_ref().map(|s| s.role_label()).unwrap_or("guest"),
                    destination,
                    "Admin access denied, redirecting to sign-in"
                );
                AccessDecision::Redirect(login_redirect(destination))
            }
        }
    }

    /// Drop the session; the caller navigates to the returned page.
    pub fn logout(&self) -> &'static str {
        if let Err(e) = self.sessions.clear_session() {
            tracing::warn!(error = %e, "Failed to clear session on logout");
        }
        AUTH_PAGE
    }
}

pub fn login_redirect(destination: &str) -> String {
    format!("{AUTH_PAGE}?redirect={destination}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_session_redirects_with_destination() {
        let access = AccessService::new(CoreLocalStorage::in_memory());
        assert_eq!(
            access.require_admin("admin"),
            AccessDecision::Redirect("auth.html?redirect=admin".to_string())
        );
    }

    #[test]
    fn non_admin_or_logged_out_sessions_are_redirected() {
        let core = CoreLocalStorage::in_memory();
        let sessions = SessionLocalStorage::new(core.clone());
        let access = AccessService::new(core);

        sessions
            .save_session(&SessionRecord::signed_in(Role::Pro, "pro@example.com", "pro"))
            .unwrap();
        assert!(matches!(access.require_admin("admin"), AccessDecision::Redirect(_)));

        let mut admin = SessionRecord::signed_in(Role::Admin, "admin@arabic.one", "admin");
        admin.logged_in = false;
        sessions.save_session(&admin).unwrap();
        assert!(matches!(access.require_admin("admin"), AccessDecision::Redirect(_)));
        assert!(access.is_admin());
        assert!(!access.is_logged_in());
    }

    #[test]
    fn admin_session_is_granted() {
        let core = CoreLocalStorage::in_memory();
        let admin = SessionRecord::signed_in(Role::Admin, "admin@arabic.one", "admin");
        SessionLocalStorage::new(core.clone()).save_session(&admin).unwrap();

        let access = AccessService::new(core);
        assert_eq!(access.require_admin("admin"), AccessDecision::Granted(admin));
        assert_eq!(access.logout(), "auth.html");
        assert!(!access.is_logged_in());
    }
}
