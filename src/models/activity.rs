use serde::{Deserialize, Serialize};

/// A recent-activity feed line. `time` is display text ("2 hours ago").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub user: String,
    pub action: String,
    pub time: String,
    pub status: String,
}
