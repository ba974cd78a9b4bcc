use crate::models::PlatformSettings;

use super::modal::ModalState;
use super::page::AdminPage;
use super::tables::{FilterOption, PageInfo, TableKind};

/// Everything the admin controller does to the page.
///
/// The browser implementation writes into the DOM; tests record the calls.
pub trait AdminSurface {
    /// Replace a table's `<tbody>` contents.
    fn set_table_body(&mut self, table: TableKind, html: &str);

    /// Text of a `[data-stat]` element.
    fn set_stat(&mut self, key: &str, value: &str);

    fn set_pagination(&mut self, table: TableKind, page: &PageInfo);

    /// Rebuild a filter `<select>` and select `selected`.
    fn set_filter_options(&mut self, filter: &str, options: &[FilterOption], selected: &str);

    fn set_user_display(&mut self, text: &str);

    /// Mark the nav link and page section for `page` active, all others not.
    fn set_active_page(&mut self, page: AdminPage);

    fn show_settings(&mut self, settings: &PlatformSettings);

    fn render_modal(&mut self, modal: &ModalState);

    fn alert(&mut self, message: &str);

    /// Blocking yes/no question.
    fn confirm(&mut self, message: &str) -> bool;

    /// Leave the page for a relative URL.
    fn redirect(&mut self, url: &str);
}

#[cfg(test)]
pub(crate) use recording::RecordingSurface;
