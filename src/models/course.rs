use serde::{Deserialize, Serialize};
use std::fmt;

/// Publication state shared by courses and modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Active,
    Draft,
}

impl PublishStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishStatus::Active => "active",
            PublishStatus::Draft => "draft",
        }
    }
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    /// Stored count; not recomputed from the module list.
    pub modules: u32,
    pub status: PublishStatus,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: i64,
    pub title: String,
    pub course_id: i64,
    pub course_title: String,
    pub week: u32,
    pub status: PublishStatus,
}

impl Module {
    /// Relative URL of the week page this module is taught on.
    pub fn page_url(&self) -> String {
        format!("week{}.html", self.week)
    }
}
