use crate::html::{action_button, badge, cell, escape};
use crate::admin::state::{ALL, AdminUiState};
use crate::models::{MockDataset, Module};

use super::{TableKind, TableView};

/// One `<option>` of a filter `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<option value="{}">{}</option>"#,
            escape(&self.value),
            escape(&self.label)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulesView {
    pub table: TableView,
    /// Course filter options, rebuilt from the current courses
    pub options: Vec<FilterOption>,
    /// Selection after re-validation against `options`
    pub selected: String,
}

/// `all` first, then one option per course.
pub fn course_options(data: &MockDataset) -> Vec<FilterOption> {
    std::iter::once(FilterOption::new(ALL, "All Courses"))
        .chain(
            data.courses
                .iter()
                .map(|c| FilterOption::new(c.id.to_string(), c.title.clone())),
        )
        .collect()
}

pub fn render_modules(data: &MockDataset, state: &AdminUiState) -> ModulesView {
    let options = course_options(data);
    let selected = if options.iter().any(|o| o.value == state.course_filter) {
        state.course_filter.clone()
    } else {
        tracing::debug!(course_filter = %state.course_filter, "Stale course filter, showing all");
        ALL.to_string()
    };

    let course_id = if selected == ALL {
        None
    } else {
        selected.parse::<i64>().ok()
    };
    let rows = data
        .modules
        .iter()
        .filter(|m| course_id.is_none_or(|id| m.course_id == id))
        .map(module_row)
        .collect();

    ModulesView {
        table: TableView::new(TableKind::Modules, rows),
        options,
        selected,
    }
}

fn module_row(module: &Module) -> String {
    let actions = [
        action_button("editModule", "module-id", module.id, "Edit", false),
        action_button("viewModule", "module-id", module.id, "View", false),
    ]
    .concat();

    [
        "<tr>".to_string(),
        cell(&module.id.to_string()),
        cell(&escape(&module.title)),
        cell(&escape(&module.course_title)),
        cell(&format!("Week {}", module.week)),
        cell(&badge(module.status.as_str())),
        cell(&actions),
        "</tr>".to_string(),
    ]
    .concat()
}
