//! Pure HTML escaping utilities.

/// Escape text for use in HTML element content.
///
/// # Examples
///
/// ```
/// use spanweave::markup::escape_html;
///
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 10);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape text for use inside a double-quoted HTML attribute.
///
/// # Examples
///
/// ```
/// use spanweave::markup::escape_attribute;
///
/// assert_eq!(escape_attribute(r#"say "hi""#), "say &quot;hi&quot;");
/// ```
pub fn escape_attribute(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 10);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
