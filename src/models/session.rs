use serde::{Deserialize, Serialize};

use super::user::Role;

/// The fabricated session written by the auth screens and read by the
/// admin gate. Field names are the persisted contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionRecord {
    #[serde(rename = "loggedIn", default)]
    pub logged_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

impl SessionRecord {
    pub fn signed_in(role: Role, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            logged_in: true,
            role: Some(role),
            email: email.into(),
            name: name.into(),
        }
    }

    /// Role label for display; sessions without a role are guests.
    pub fn role_label(&self) -> &'static str {
        self.role.map(|r| r.as_str()).unwrap_or("guest")
    }
}

/// Identity shown in the admin header
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl CurrentUser {
    pub const FALLBACK_NAME: &'static str = "Admin User";
    pub const FALLBACK_EMAIL: &'static str = "admin@arabic.one";
    pub const FALLBACK_ROLE: &'static str = "admin";

    pub fn from_session(session: Option<&SessionRecord>) -> Self {
        Self {
            name: pick(session.map(|s| s.name.as_str()), Self::FALLBACK_NAME),
            email: pick(session.map(|s| s.email.as_str()), Self::FALLBACK_EMAIL),
            role: pick(
                session.and_then(|s| s.role).map(|r| r.as_str()),
                Self::FALLBACK_ROLE,
            ),
        }
    }

    pub fn display(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}

fn pick(value: Option<&str>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
