//! Markup-safe display encoding for multi-line cell values
//!
//! The grid's value column shows user-entered text that may contain
//! markup-significant characters and literal newlines. Display encoding
//! escapes the markup characters first, then converts each newline to a
//! `<br/>` line break, so user text can never smuggle active tags into
//! the rendered output.

/// Escape the markup-significant characters `& < > " '`
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Display form of a grid cell value: escape markup, then turn literal
/// newlines into `<br/>`.
///
/// An empty value is returned as-is -- no encoding is applied to
/// nothing.
pub fn display_value(value: &str) -> String {
    if value.is_empty() {
        return value.to_string();
    }
    encode(value).replace('\n', "<br/>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_escapes_all_markup_characters() {
        assert_eq!(
            encode(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn display_value_escapes_tags_and_breaks_lines() {
        let rendered = display_value("<b>x</b>\nY");

        assert_eq!(rendered, "&lt;b&gt;x&lt;/b&gt;<br/>Y");
        // No active markup tags survive...
        assert!(!rendered.contains("<b>"));
        // ...and exactly one line break is produced
        assert_eq!(rendered.matches("<br/>").count(), 1);
    }

    #[test]
    fn display_value_leaves_empty_input_untouched() {
        assert_eq!(display_value(""), "");
    }

    #[test]
    fn display_value_passes_plain_text_through() {
        assert_eq!(display_value("plain text"), "plain text");
    }
}
