use crate::html::{action_button, badge, cell, escape, format_date};
use crate::models::{Course, MockDataset};

use super::{TableKind, TableView};

pub fn render_courses(data: &MockDataset) -> TableView {
    let rows = data.courses.iter().map(course_row).collect();
    TableView::new(TableKind::Courses, rows)
}

fn course_row(course: &Course) -> String {
    let actions = [
        action_button("editCourse", "course-id", course.id, "Edit", false),
        action_button("viewCourse", "course-id", course.id, "View", false),
    ]
    .concat();

    [
        "<tr>".to_string(),
        cell(&course.id.to_string()),
        cell(&escape(&course.title)),
        cell(&course.modules.to_string()),
        cell(&badge(course.status.as_str())),
        cell(&escape(&format_date(&course.created_at))),
        cell(&actions),
        "</tr>".to_string(),
    ]
    .concat()
}
