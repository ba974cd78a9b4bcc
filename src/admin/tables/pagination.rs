/// Controls for one paginated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl PageInfo {
    pub fn new(page: usize, total_items: usize, per_page: usize) -> Self {
        let total_pages = total_items.div_ceil(per_page.max(1));
        Self {
            page,
            total_pages,
            prev_disabled: page <= 1,
            next_disabled: page >= total_pages,
        }
    }

    /// Text for the `[data-page-info]` element.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// The slice of `items` shown on `page` (1-based). Pages past the end are
/// empty rather than an error.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PageInfo::new(1, 7, 10).total_pages, 1);
        assert_eq!(PageInfo::new(1, 10, 10).total_pages, 1);
        assert_eq!(PageInfo::new(1, 11, 10).total_pages, 2);
        assert_eq!(PageInfo::new(1, 0, 10).total_pages, 0);
    }

    #[test]
    fn controls_disable_at_the_edges() {
        let first = PageInfo::new(1, 25, 10);
        assert!(first.prev_disabled);
        assert!(!first.next_disabled);

        let last = PageInfo::new(3, 25, 10);
        assert!(!last.prev_disabled);
        assert!(last.next_disabled);
        assert_eq!(last.label(), "Page 3 of 3");

        let empty = PageInfo::new(1, 0, 10);
        assert!(empty.prev_disabled && empty.next_disabled);
        assert_eq!(empty.label(), "Page 1 of 0");
    }

    #[test]
    fn slices_pages() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&items, 1, 10), &items[0..10]);
        assert_eq!(page_slice(&items, 3, 10), &[21, 22, 23, 24, 25]);
        assert!(page_slice(&items, 4, 10).is_empty());
        assert!(page_slice(&items, 0, 10).len() == 10);
    }
}
