//! Course page enhancements: active nav link, in-page anchors, the
//! collapsible sidebar and the self-paced study cards.

pub mod active_nav;
pub mod anchors;
pub mod sidebar;
pub mod study_support;

pub use active_nav::{current_page, highlight, is_active};
pub use anchors::scroll_target;
pub use sidebar::Sidebar;
pub use study_support::{Placement, WeekSupport, support_for};

/// What a course page needs on load.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEnhancement {
    pub page: String,
    /// Active flag per sidebar link
    pub active_links: Vec<bool>,
    /// Self-paced cards and where to put them, for pages that have them
    pub support: Option<(Placement, String)>,
}

impl PageEnhancement {
    pub fn for_page<'a>(
        path: &str,
        links: impl IntoIterator<Item = &'a str>,
        has_highlight_card: bool,
    ) -> Self {
        let page = current_page(path).to_string();
        let support = support_for(&page).map(|s| (Placement::for_page(has_highlight_card), s.render()));

        tracing::debug!(page = %page, support = support.is_some(), "Enhancing course page");
        Self {
            active_links: highlight(links, path),
            support,
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_page_gets_cards_after_highlight() {
        let page = PageEnhancement::for_page("/c/week4.html", ["index.html", "week4.html"], true);
        assert_eq!(page.page, "week4.html");
        assert_eq!(page.active_links, vec![false, true]);
        assert!(matches!(page.support, Some((Placement::AfterHighlight, ref html)) if html.contains("Mastery Benchmarks")));
    }

    #[test]
    fn pages_without_content_get_none() {
        let page = PageEnhancement::for_page("/c/auth.html", ["index.html"], false);
        assert!(page.support.is_none());
        assert_eq!(page.active_links, vec![false]);
    }
}
