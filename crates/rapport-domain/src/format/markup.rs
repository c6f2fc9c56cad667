//! Minimal reader for the fragments produced by [`super::render_report`].
//!
//! It understands start/end tags, a `style` attribute, `<br>` and the
//! entities emitted by [`super::escape_html`]. It is not a general HTML
//! parser.

use super::escape::unescape_html;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Open { name: String, style: String },
    Close { name: String },
    LineBreak,
    Text(String),
}

pub fn tokenize(markup: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = markup;

    while !rest.is_empty() {
        match rest.find('<') {
            Some(0) => match rest.find('>') {
                Some(end) => {
                    tokens.push(parse_tag(&rest[1..end]));
                    rest = &rest[end + 1..];
                }
                None => {
                    push_text(&mut tokens, rest);
                    rest = "";
                }
            },
            Some(start) => {
                push_text(&mut tokens, &rest[..start]);
                rest = &rest[start..];
            }
            None => {
                push_text(&mut tokens, rest);
                rest = "";
            }
        }
    }
    tokens
}

fn push_text(tokens: &mut Vec<Token>, raw: &str) {
    if !raw.is_empty() {
        tokens.push(Token::Text(unescape_html(raw)));
    }
}

fn parse_tag(inner: &str) -> Token {
    let inner = inner.trim().trim_end_matches('/').trim_end();
    if let Some(name) = inner.strip_prefix('/') {
        return Token::Close {
            name: name.trim().to_ascii_lowercase(),
        };
    }

    let name_end = inner.find(char::is_whitespace).unwrap_or(inner.len());
    let name = inner[..name_end].to_ascii_lowercase();
    if name == "br" {
        return Token::LineBreak;
    }
    Token::Open {
        style: style_attribute(&inner[name_end..]).unwrap_or_default(),
        name,
    }
}

fn style_attribute(attrs: &str) -> Option<String> {
    let start = attrs.find("style=\"")? + "style=\"".len();
    let len = attrs[start..].find('"')?;
    Some(attrs[start..start + len].to_string())
}
