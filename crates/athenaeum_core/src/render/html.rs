use regex::Regex;

/// Escape text for interpolation into HTML element content or attribute
/// values.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Collapse runs of whitespace in server-provided text to single spaces and
/// trim the ends.
pub(crate) fn clean_text(text: &str) -> String {
    let re = Regex::new(r"\s{2,}").expect("Regex must be valid");
    re.replace_all(text.trim(), " ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"Dune" & 'Messiah'</b>"#),
            "&lt;b&gt;&quot;Dune&quot; &amp; &#39;Messiah&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn ampersand_is_escaped_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(clean_text("  a  desert \n\n planet  "), "a desert planet");
    }

    #[test]
    fn single_spaces_are_untouched() {
        assert_eq!(clean_text("a desert planet"), "a desert planet");
    }
}
