use crate::html::{badge, cell, escape};
use crate::models::{ActivityEntry, MockDataset};

use super::{TableKind, TableView};

pub fn render_activity(data: &MockDataset) -> TableView {
    let rows = data.recent_activity.iter().map(activity_row).collect();
    TableView::new(TableKind::RecentActivity, rows)
}

fn activity_row(entry: &ActivityEntry) -> String {
    [
        "<tr>".to_string(),
        cell(&escape(&entry.user)),
        cell(&escape(&entry.action)),
        cell(&escape(&entry.time)),
        cell(&badge(&entry.status)),
        "</tr>".to_string(),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::defaults::default_dataset;

    #[test]
    fn renders_recent_activity() {
        let table = render_activity(&default_dataset());
        assert_eq!(table.rows.len(), 5);
        assert_eq!(
            table.rows[2],
            r#"<tr><td>Mohammed Ali</td><td>Started Week 3</td><td>1 day ago</td><td><span class="admin-badge admin-badge--info">info</span></td></tr>"#
        );
    }

    #[test]
    fn empty_activity() {
        assert!(render_activity(&MockDataset::default()).body_html().contains("No recent activity"));
    }
}
