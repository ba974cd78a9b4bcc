/// Page every site path without a file name resolves to.
pub const HOME_PAGE: &str = "index.html";

/// File name of the page at `path`: its last segment, or `index.html` for
/// a directory path.
pub fn current_page(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => HOME_PAGE,
    }
}

/// Whether a sidebar link points at the current page.
pub fn is_active(href: &str, current: &str) -> bool {
    let target = href.rsplit('/').next().unwrap_or(href);
    target == current
}

/// Active flags for each sidebar link, in order.
pub fn highlight<'a>(links: impl IntoIterator<Item = &'a str>, path: &str) -> Vec<bool> {
    let current = current_page(path);
    let flags: Vec<bool> = links.into_iter().map(|href| is_active(href, current)).collect();
    tracing::debug!(page = current, active = flags.iter().filter(|f| **f).count(), "Highlighted nav");
    flags
}
