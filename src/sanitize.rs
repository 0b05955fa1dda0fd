/// Escapes HTML-significant characters in free-text input before it is
/// persisted. This is a data-integrity control, not a security boundary:
/// it keeps raw markup out of stored property keys and values.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<b>level</b>"), "&lt;b&gt;level&lt;/b&gt;");
    }

    #[test]
    fn escapes_ampersand_before_entities() {
        assert_eq!(escape("a&b"), "a&amp;b");
        assert_eq!(escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(escape(r#""five" o'clock"#), "&quot;five&quot; o&#x27;clock");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape("level"), "level");
    }
}
