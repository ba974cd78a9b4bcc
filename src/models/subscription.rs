use serde::{Deserialize, Serialize};
use std::fmt;

use super::user::SubscriptionStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    Premium,
    Pro,
}

impl SubscriptionPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionPlan::Premium => "premium",
            SubscriptionPlan::Pro => "pro",
        }
    }
}

impl fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub user_id: i64,
    /// Cached copy of the user's display name
    pub user_name: String,
    pub plan: SubscriptionPlan,
    pub status: SubscriptionStatus,
    pub started: String,
    /// Absent once canceled
    pub next_billing: Option<String>,
    /// Monthly amount; prices may carry cents
    pub amount: f64,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }
}
