//! Document kinds and markdown rendering.

use pulldown_cmark::{Options, Parser, html};

use super::name::extension;
use crate::constants::{MARKDOWN_EXTENSION, TEXT_EXTENSION};

/// How a document is presented when viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Rendered to HTML.
    Markdown,
    /// Served verbatim.
    Text,
}

impl DocumentKind {
    /// Determine the kind from a filename's extension.
    pub fn from_name(name: &str) -> Option<Self> {
        match extension(name)? {
            MARKDOWN_EXTENSION => Some(DocumentKind::Markdown),
            TEXT_EXTENSION => Some(DocumentKind::Text),
            _ => None,
        }
    }
}

/// Render markdown source to an HTML fragment.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut html_output = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}
