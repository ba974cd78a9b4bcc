//! Small HTML helpers shared by the admin tables and page content.

use chrono::{DateTime, NaiveDate};

/// Escape text for use in element content or a quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `"2024-01-15"` → `"Jan 15, 2024"`. Empty input is `N/A`; anything
/// unparsable is returned unchanged.
pub fn format_date(value: &str) -> String {
    if value.is_empty() {
        return "N/A".to_string();
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()));

    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

/// `<span class="admin-badge admin-badge--{label}">{label}</span>`
pub fn badge(label: &str) -> String {
    let label = escape(label);
    format!(r#"<span class="admin-badge admin-badge--{label}">{label}</span>"#)
}

/// `<tag class="...">inner</tag>`. `inner` is inserted as-is; an empty
/// class is left off.
pub fn element(tag: &str, class: &str, inner: &str) -> String {
    if class.is_empty() {
        format!("<{tag}>{inner}</{tag}>")
    } else {
        format!(r#"<{tag} class="{class}">{inner}</{tag}>"#)
    }
}

/// Element whose content is escaped text.
pub fn text_element(tag: &str, class: &str, text: &str) -> String {
    element(tag, class, &escape(text))
}

pub fn cell(content: &str) -> String {
    format!("<td>{content}</td>")
}

/// Single placeholder row spanning the table.
pub fn empty_row(colspan: u8, message: &str) -> String {
    format!(r#"<tr><td colspan="{colspan}" class="admin-table-empty">{message}</td></tr>"#)
}

/// Row action button. `id_attr` is the data attribute carrying the record id.
pub fn action_button(action: &str, id_attr: &str, id: i64, label: &str, danger: bool) -> String {
    let class = if danger {
        "admin-action-btn admin-action-btn--danger"
    } else {
        "admin-action-btn"
    };
    format!(r#"<button class="{class}" data-action="{action}" data-{id_attr}="{id}">{label}</button>"#)
}
