/// The dashboard's single modal dialog. Starts hidden.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalState {
    visible: bool,
    title: String,
    body: String,
}

impl ModalState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Inner HTML of `[data-modal-body]`.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn show(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.title = title.into();
        self.body = body.into();
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Document keydown. Returns whether the modal closed.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.visible {
            self.close();
            return true;
        }
        false
    }

    /// Click inside the modal element. Only clicks on the overlay itself,
    /// not on the dialog content, close it.
    pub fn on_click(&mut self, on_overlay: bool) -> bool {
        if on_overlay && self.visible {
            self.close();
            return true;
        }
        false
    }
}
