use super::markup::{tokenize, Token};

/// Plain-text rendition of a markup fragment: tags dropped, breaks and
/// block boundaries turned into newlines, entities decoded, blank lines
/// removed.
pub fn render_plain_text(markup: &str) -> String {
    let mut text = String::new();
    for token in tokenize(markup) {
        match token {
            Token::Text(t) => text.push_str(&t),
            Token::LineBreak => text.push('\n'),
            Token::Open { name, .. } | Token::Close { name } if name == "div" => text.push('\n'),
            Token::Open { .. } | Token::Close { .. } => {}
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
