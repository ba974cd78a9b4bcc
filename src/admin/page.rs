use std::fmt;

/// Sections of the admin dashboard (`data-admin-page`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdminPage {
    #[default]
    Dashboard,
    Users,
    Subscriptions,
    Courses,
    Modules,
    Settings,
}

impl AdminPage {
    pub const ALL: [AdminPage; 6] = [
        AdminPage::Dashboard,
        AdminPage::Users,
        AdminPage::Subscriptions,
        AdminPage::Courses,
        AdminPage::Modules,
        AdminPage::Settings,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AdminPage::Dashboard => "dashboard",
            AdminPage::Users => "users",
            AdminPage::Subscriptions => "subscriptions",
            AdminPage::Courses => "courses",
            AdminPage::Modules => "modules",
            AdminPage::Settings => "settings",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.name() == name)
    }
}

impl fmt::Display for AdminPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
