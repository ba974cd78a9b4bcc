//! Rendering of the admin tables into `<tbody>` markup.
//!
//! Every renderer is a pure function of the dataset and the current UI
//! state, so re-rendering after any change is always safe.

pub mod activity;
pub mod courses;
pub mod modules;
pub mod pagination;
pub mod subscriptions;
pub mod users;

pub use activity::render_activity;
pub use courses::render_courses;
pub use modules::{FilterOption, ModulesView, course_options, render_modules};
pub use pagination::{PageInfo, page_slice};
pub use subscriptions::{SubscriptionSummary, SubscriptionsView, render_subscriptions};
pub use users::{UsersView, filter_users, render_users};

use crate::html::empty_row;

/// The tables the dashboard renders (`data-table` names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Users,
    Subscriptions,
    Courses,
    Modules,
    RecentActivity,
}

impl TableKind {
    pub fn name(&self) -> &'static str {
        match self {
            TableKind::Users => "users",
            TableKind::Subscriptions => "subscriptions",
            TableKind::Courses => "courses",
            TableKind::Modules => "modules",
            TableKind::RecentActivity => "recentActivity",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        [
            TableKind::Users,
            TableKind::Subscriptions,
            TableKind::Courses,
            TableKind::Modules,
            TableKind::RecentActivity,
        ]
        .into_iter()
        .find(|kind| kind.name() == name)
    }

    fn columns(&self) -> u8 {
        match self {
            TableKind::Users | TableKind::Subscriptions => 7,
            TableKind::Courses | TableKind::Modules => 6,
            TableKind::RecentActivity => 4,
        }
    }

    fn empty_message(&self) -> &'static str {
        match self {
            TableKind::Users => "No users found",
            TableKind::Subscriptions => "No subscriptions found",
            TableKind::Courses => "No courses found",
            TableKind::Modules => "No modules found",
            TableKind::RecentActivity => "No recent activity",
        }
    }
}

/// Rendered rows for one table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub kind: TableKind,
    pub rows: Vec<String>,
}

impl TableView {
    pub fn new(kind: TableKind, rows: Vec<String>) -> Self {
        Self { kind, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Inner HTML for the `<tbody>`; a single placeholder row when empty.
    pub fn body_html(&self) -> String {
        if self.rows.is_empty() {
            return empty_row(self.kind.columns(), self.kind.empty_message());
        }
        self.rows.concat()
    }
}
