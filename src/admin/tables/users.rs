use crate::html::{action_button, badge, cell, escape, format_date};
use crate::admin::state::AdminUiState;
use crate::models::{MockDataset, User};

use super::pagination::{PageInfo, page_slice};
use super::{TableKind, TableView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersView {
    pub table: TableView,
    pub page: PageInfo,
    /// Users matching the search, across all pages
    pub matched: usize,
}

/// Users whose name, email or role contains `query`, ignoring case.
/// An empty query matches everyone.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    if query.is_empty() {
        return users.iter().collect();
    }
    let query = query.to_lowercase();
    users.iter().filter(|u| u.matches_query(&query)).collect()
}

pub fn render_users(data: &MockDataset, state: &AdminUiState) -> UsersView {
    let filtered = filter_users(&data.users, &state.users_search);
    let page = PageInfo::new(state.users_page, filtered.len(), state.per_page);
    let rows = page_slice(&filtered, state.users_page, state.per_page)
        .iter()
        .map(|user| user_row(user))
        .collect();

    tracing::debug!(
        matched = filtered.len(),
        page = page.page,
        total_pages = page.total_pages,
        "Rendered users table"
    );

    UsersView {
        table: TableView::new(TableKind::Users, rows),
        page,
        matched: filtered.len(),
    }
}

fn user_row(user: &User) -> String {
    let status = match user.subscription_status {
        Some(status) => status.as_str().to_string(),
        None => "<em>None</em>".to_string(),
    };
    let actions = [
        action_button("editUser", "user-id", user.id, "Edit", false),
        action_button("deleteUser", "user-id", user.id, "Delete", true),
    ]
    .concat();

    [
        "<tr>".to_string(),
        cell(&user.id.to_string()),
        cell(&escape(&user.name)),
        cell(&escape(&user.email)),
        cell(&badge(user.role.as_str())),
        cell(&status),
        cell(&escape(&format_date(&user.created_at))),
        cell(&actions),
        "</tr>".to_string(),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, SubscriptionStatus};
    use crate::store::defaults::default_dataset;

    fn many_users(count: i64) -> MockDataset {
        MockDataset {
            users: (1..=count)
                .map(|id| User {
                    id,
                    name: format!("Learner {id}"),
                    email: format!("learner{id}@example.com"),
                    role: Role::User,
                    subscription_status: None,
                    created_at: "2024-02-01".to_string(),
                })
                .collect(),
            ..MockDataset::default()
        }
    }

    #[test]
    fn search_matches_name_email_or_role_ignoring_case() {
        let data = default_dataset();

        let by_name: Vec<i64> = filter_users(&data.users, "HASSAN").iter().map(|u| u.id).collect();
        assert_eq!(by_name, vec![1]);

        let by_role: Vec<i64> = filter_users(&data.users, "Pro").iter().map(|u| u.id).collect();
        assert_eq!(by_role, vec![2, 6]);

        assert_eq!(filter_users(&data.users, "").len(), data.users.len());
        assert!(filter_users(&data.users, "zzz-nobody").is_empty());
    }

    #[test]
    fn search_result_is_exactly_the_matching_set() {
        let data = default_dataset();
        for query in ["a", "example", "pro", "@", "Ali"] {
            let lowered = query.to_lowercase();
            let expected: Vec<i64> = data
                .users
                .iter()
                .filter(|u| {
                    u.name.to_lowercase().contains(&lowered)
                        || u.email.to_lowercase().contains(&lowered)
                        || u.role.as_str().contains(&lowered)
                })
                .map(|u| u.id)
                .collect();
            let actual: Vec<i64> = filter_users(&data.users, query).iter().map(|u| u.id).collect();
            assert_eq!(actual, expected, "query {query:?}");
        }
    }

    #[test]
    fn paginates_filtered_users() {
        let data = many_users(23);
        let mut state = AdminUiState::default();

        let first = render_users(&data, &state);
        assert_eq!(first.table.rows.len(), 10);
        assert_eq!(first.page.total_pages, 3);
        assert!(first.page.prev_disabled);

        state.users_page = 3;
        let last = render_users(&data, &state);
        assert_eq!(last.table.rows.len(), 3);
        assert!(last.page.next_disabled);

        state.users_page = 4;
        let beyond = render_users(&data, &state);
        assert!(beyond.table.is_empty());
        assert!(beyond.table.body_html().contains("No users found"));
    }

    #[test]
    fn row_markup() {
        let data = default_dataset();
        let view = render_users(&data, &AdminUiState::default());
        let first = &view.table.rows[0];

        assert!(first.starts_with("<tr><td>1</td><td>Ahmed Hassan</td>"));
        assert!(first.contains(r#"<span class="admin-badge admin-badge--premium">premium</span>"#));
        assert!(first.contains("<td>Jan 15, 2024</td>"));
        assert!(first.contains(r#"data-action="deleteUser" data-user-id="1""#));

        let without_status = data
            .users
            .iter()
            .position(|u| u.subscription_status.is_none())
            .map(|i| &view.table.rows[i]);
        assert!(without_status.is_some_and(|row| row.contains("<td><em>None</em></td>")));
        assert!(data.users.iter().any(|u| u.subscription_status == Some(SubscriptionStatus::Active)));
    }

    #[test]
    fn names_are_escaped() {
        let mut data = many_users(1);
        data.users[0].name = "<script>x</script>".to_string();
        let view = render_users(&data, &AdminUiState::default());
        assert!(view.table.rows[0].contains("&lt;script&gt;"));
    }
}
