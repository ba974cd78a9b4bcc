use serde::{Deserialize, Serialize};

use super::activity::ActivityEntry;
use super::course::{Course, Module};
use super::subscription::Subscription;
use super::user::User;

/// The admin dashboard's whole simulated backend, persisted as one blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MockDataset {
    pub users: Vec<User>,
    pub subscriptions: Vec<Subscription>,
    pub courses: Vec<Course>,
    pub modules: Vec<Module>,
    #[serde(rename = "recentActivity")]
    pub recent_activity: Vec<ActivityEntry>,
}

impl MockDataset {
    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn course(&self, id: i64) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn module(&self, id: i64) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Subscriptions whose `user_id` no longer points at a user.
    pub fn orphaned_subscriptions(&self) -> impl Iterator<Item = &Subscription> {
        self.subscriptions
            .iter()
            .filter(|s| self.user(s.user_id).is_none())
    }
}
