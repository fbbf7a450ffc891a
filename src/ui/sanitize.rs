//! HTML escaping for untrusted archive text.
//!
//! Titles, excerpts, categories and queries all come from data the page does not
//! control. Every interpolation into markup, text or attribute, goes through
//! [`escape_html`].

/// Escapes text for safe interpolation into HTML text or quoted attributes.
///
/// # Examples
///
/// ```
/// use archive_front::ui::sanitize::escape_html;
///
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_html("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
/// assert_eq!(escape_html(""), "");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
