//! Escaping of caller text placed into popup HTML

use crate::core::config::EscapeMode;
use std::borrow::Cow;

/// Replaces the five HTML-significant characters with entities. Safe for
/// both element text and double-quoted attribute values.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Applies `mode` to `input`
pub fn apply(mode: EscapeMode, input: &str) -> Cow<'_, str> {
    match mode {
        EscapeMode::Escape => escape_html(input),
        EscapeMode::Raw => Cow::Borrowed(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_specials() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_html("Praça XV de Novembro"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_raw_mode_is_verbatim() {
        assert_eq!(apply(EscapeMode::Raw, "<i>x</i>"), "<i>x</i>");
        assert_eq!(apply(EscapeMode::Escape, "<i>x</i>"), "&lt;i&gt;x&lt;/i&gt;");
    }
}
