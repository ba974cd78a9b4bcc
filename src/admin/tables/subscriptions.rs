use crate::html::{action_button, badge, cell, escape, format_date};
use crate::admin::state::{ALL, AdminUiState};
use crate::models::{MockDataset, Subscription};

use super::{TableKind, TableView};

/// Figures shown above the subscriptions table, over the filtered rows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SubscriptionSummary {
    pub active_count: usize,
    pub monthly_revenue: f64,
}

impl SubscriptionSummary {
    pub fn from_rows(rows: &[&Subscription]) -> Self {
        rows.iter()
            .filter(|s| s.is_active())
            .fold(Self::default(), |acc, s| Self {
                active_count: acc.active_count + 1,
                monthly_revenue: acc.monthly_revenue + s.amount,
            })
    }

    /// Whole sums print without decimals, fractional ones as-is.
    pub fn revenue_label(&self) -> String {
        format!("${}", self.monthly_revenue)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionsView {
    pub table: TableView,
    pub summary: SubscriptionSummary,
}

/// Subscriptions whose status equals `status` exactly; `all` keeps every row.
pub fn filter_subscriptions<'a>(subscriptions: &'a [Subscription], status: &str) -> Vec<&'a Subscription> {
    subscriptions
        .iter()
        .filter(|s| status == ALL || s.status.as_str() == status)
        .collect()
}

pub fn render_subscriptions(data: &MockDataset, state: &AdminUiState) -> SubscriptionsView {
    let filtered = filter_subscriptions(&data.subscriptions, &state.subscription_status);
    let summary = SubscriptionSummary::from_rows(&filtered);
    let rows = filtered.iter().map(|s| subscription_row(s)).collect();

    tracing::debug!(
        status = %state.subscription_status,
        rows = filtered.len(),
        "Rendered subscriptions table"
    );

    SubscriptionsView {
        table: TableView::new(TableKind::Subscriptions, rows),
        summary,
    }
}

fn subscription_row(sub: &Subscription) -> String {
    let next_billing = match &sub.next_billing {
        Some(date) if !date.is_empty() => escape(&format_date(date)),
        _ => "<em>N/A</em>".to_string(),
    };

    [
        "<tr>".to_string(),
        cell(&escape(&sub.user_name)),
        cell(&badge(sub.plan.as_str())),
        cell(&badge(sub.status.as_str())),
        cell(&escape(&format_date(&sub.started))),
        cell(&next_billing),
        cell(&format!("${}/mo", sub.amount)),
        cell(&action_button("editSubscription", "sub-id", sub.id, "Edit", false)),
        "</tr>".to_string(),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::defaults::default_dataset;

    fn state(status: &str) -> AdminUiState {
        AdminUiState {
            subscription_status: status.to_string(),
            ..AdminUiState::default()
        }
    }

    #[test]
    fn all_status_keeps_every_row() {
        let data = default_dataset();
        let view = render_subscriptions(&data, &state("all"));
        assert_eq!(view.table.rows.len(), 5);
        assert_eq!(view.summary.active_count, 4);
        assert_eq!(view.summary.revenue_label(), "$156");
    }

    #[test]
    fn aggregates_follow_the_filter() {
        let data = default_dataset();

        let canceled = render_subscriptions(&data, &state("canceled"));
        assert_eq!(canceled.table.rows.len(), 1);
        assert_eq!(canceled.summary, SubscriptionSummary::default());
        assert_eq!(canceled.summary.revenue_label(), "$0");

        let active = render_subscriptions(&data, &state("active"));
        assert_eq!(active.table.rows.len(), 4);
        assert_eq!(active.summary.monthly_revenue, 156.0);
    }

    #[test]
    fn unknown_status_matches_nothing() {
        let view = render_subscriptions(&default_dataset(), &state("paused"));
        assert!(view.table.is_empty());
        assert!(view.table.body_html().contains("No subscriptions found"));
    }

    #[test]
    fn row_markup() {
        let view = render_subscriptions(&default_dataset(), &state("all"));
        assert_eq!(
            view.table.rows[0],
            concat!(
                "<tr><td>Ahmed Hassan</td>",
                r#"<td><span class="admin-badge admin-badge--premium">premium</span></td>"#,
                r#"<td><span class="admin-badge admin-badge--active">active</span></td>"#,
                "<td>Jan 15, 2024</td><td>May 15, 2024</td><td>$29/mo</td>",
                r#"<td><button class="admin-action-btn" data-action="editSubscription" data-sub-id="1">Edit</button></td></tr>"#,
            )
        );
        assert!(view.table.rows[4].contains("<td><em>N/A</em></td>"));
    }

    #[test]
    fn fractional_prices_keep_their_cents() {
        let mut data = default_dataset();
        data.subscriptions[0].amount = 29.5;
        data.subscriptions[1].amount = 0.25;

        let view = render_subscriptions(&data, &state("all"));
        assert!(view.table.rows[0].contains("<td>$29.5/mo</td>"));
        assert_eq!(view.summary.monthly_revenue, 107.75);
        assert_eq!(view.summary.revenue_label(), "$107.75");
    }
}
