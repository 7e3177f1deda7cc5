//! The closed markup vocabulary allowed in replies: bold emphasis and
//! hyperlink anchors. Reply builders go through these helpers instead of
//! writing tags inline.

pub fn bold(text: &str) -> String {
    format!("<b>{}</b>", text)
}

pub fn link(href: &str, text: &str) -> String {
    format!("<a href=\"{}\">{}</a>", href, text)
}
