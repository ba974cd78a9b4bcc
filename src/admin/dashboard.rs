use crate::models::{MockDataset, PublishStatus, Role};

/// Headline numbers on the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_users: usize,
    pub premium_users: usize,
    pub pro_users: usize,
    pub active_courses: usize,
    pub total_modules: usize,
    pub active_subscriptions: usize,
}

impl DashboardStats {
    pub fn from_dataset(data: &MockDataset) -> Self {
        let with_role = |role: Role| data.users.iter().filter(|u| u.role == role).count();

        Self {
            total_users: data.users.len(),
            premium_users: with_role(Role::Premium),
            pro_users: with_role(Role::Pro),
            active_courses: data
                .courses
                .iter()
                .filter(|c| c.status == PublishStatus::Active)
                .count(),
            total_modules: data.modules.len(),
            active_subscriptions: data.subscriptions.iter().filter(|s| s.is_active()).count(),
        }
    }

    /// `(data-stat key, value)` pairs.
    pub fn entries(&self) -> [(&'static str, usize); 6] {
        [
            ("totalUsers", self.total_users),
            ("premiumUsers", self.premium_users),
            ("proUsers", self.pro_users),
            ("activeCourses", self.active_courses),
            ("totalModules", self.total_modules),
            ("activeSubscriptions", self.active_subscriptions),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::defaults::default_dataset;

    #[test]
    fn default_dataset_stats() {
        let stats = DashboardStats::from_dataset(&default_dataset());
        assert_eq!(
            stats,
            DashboardStats {
                total_users: 7,
                premium_users: 3,
                pro_users: 2,
                active_courses: 1,
                total_modules: 15,
                active_subscriptions: 4,
            }
        );
        assert_eq!(stats.entries()[0], ("totalUsers", 7));
    }

    #[test]
    fn empty_dataset_is_all_zero() {
        assert_eq!(
            DashboardStats::from_dataset(&MockDataset::default()),
            DashboardStats::default()
        );
    }
}
