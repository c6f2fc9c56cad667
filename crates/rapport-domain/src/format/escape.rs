/// Escapes the five characters that could break out of an HTML text node or
/// attribute value.
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

/// Inverse of [`escape_html`]. Unknown entities are left untouched.
pub fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let decoded = [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&#39;", '\''),
        ]
        .iter()
        .find(|(entity, _)| rest.starts_with(entity));
        match decoded {
            Some((entity, c)) => {
                out.push(*c);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_special_chars() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_html("Réunion d’équipe"), "Réunion d’équipe");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escaping_twice_never_exposes_markup() {
        let once = escape_html("<b>");
        let twice = escape_html(&once);
        assert_eq!(twice, "&amp;lt;b&amp;gt;");
        assert!(!twice.contains('<'));
    }

    #[test]
    fn test_unescape_reverses_escape() {
        let raw = r#"if a < b && c > "d" then 'e'"#;
        assert_eq!(unescape_html(&escape_html(raw)), raw);
    }

    #[test]
    fn test_unescape_keeps_unknown_entities() {
        assert_eq!(unescape_html("&nbsp;&amp"), "&nbsp;&amp");
    }
}
