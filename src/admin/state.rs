/// Filter value meaning "no filter".
pub const ALL: &str = "all";

/// Search text, filter selections and pagination for the admin tables.
///
/// Renderers only read this; the controller updates it from input events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUiState {
    pub users_search: String,
    /// 1-based
    pub users_page: usize,
    pub per_page: usize,
    pub subscription_status: String,
    pub course_filter: String,
}

impl AdminUiState {
    pub fn new(per_page: usize) -> Self {
        Self {
            users_search: String::new(),
            users_page: 1,
            per_page: per_page.max(1),
            subscription_status: ALL.to_string(),
            course_filter: ALL.to_string(),
        }
    }
}

impl Default for AdminUiState {
    fn default() -> Self {
        Self::new(10)
    }
}
