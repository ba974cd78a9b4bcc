/// Element id a same-page link should smooth-scroll to.
///
/// Bare `#` and empty links are left to the browser. A returned id that
/// matches no element also falls through to default navigation.
pub fn scroll_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_named_fragments_scroll() {
        assert_eq!(scroll_target("#vowels"), Some("vowels"));
        assert_eq!(scroll_target("#"), None);
        assert_eq!(scroll_target(""), None);
        assert_eq!(scroll_target("week2.html#vowels"), None);
    }
}
