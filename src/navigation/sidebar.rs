/// Widest viewport, in CSS pixels, where an outside click closes the sidebar.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Collapsible course sidebar and its toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sidebar {
    open: bool,
}

impl Sidebar {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// `collapsed` class on the sidebar, `sidebar-collapsed` on the page.
    pub fn is_collapsed(&self) -> bool {
        !self.open
    }

    pub fn toggle_icon(&self) -> &'static str {
        if self.open { "✕" } else { "☰" }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.open { "Close menu" } else { "Open menu" }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "Sidebar toggled");
    }

    /// Document click. On narrow viewports a click outside both the
    /// sidebar and its toggle closes an open sidebar. Returns whether it
    /// closed.
    pub fn on_document_click(&mut self, viewport_width: u32, inside_sidebar: bool, on_toggle: bool) -> bool {
        if viewport_width > MOBILE_BREAKPOINT || !self.open || inside_sidebar || on_toggle {
            return false;
        }
        self.open = false;
        true
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_updates_button() {
        let mut sidebar = Sidebar::new(false);
        assert_eq!(sidebar.toggle_icon(), "☰");
        assert_eq!(sidebar.toggle_label(), "Open menu");

        sidebar.toggle();
        assert!(sidebar.is_open());
        assert!(!sidebar.is_collapsed());
        assert_eq!(sidebar.toggle_icon(), "✕");
        assert_eq!(sidebar.toggle_label(), "Close menu");
    }

    #[test]
    fn outside_click_closes_only_on_mobile() {
        let mut sidebar = Sidebar::new(true);
        assert!(!sidebar.on_document_click(1024, false, false));
        assert!(!sidebar.on_document_click(600, true, false));
        assert!(!sidebar.on_document_click(600, false, true));
        assert!(sidebar.is_open());

        assert!(sidebar.on_document_click(768, false, false));
        assert!(sidebar.is_collapsed());
        assert_eq!(sidebar.toggle_icon(), "☰");
        assert!(!sidebar.on_document_click(600, false, false));
    }
}
